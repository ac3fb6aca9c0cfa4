//! Navigation state machine.
//!
//! [`handle_key`] is a pure function from the current state, one decoded
//! key and the document model to the next state. Renderers only read
//! [`NavState`]; nothing else writes it.

use crate::model::Model;
use crate::tui::enums::{Key, Step, View};

/// Current view plus cursor and selection data.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NavState {
    pub view: View,
    /// Set exactly while `view` is `Epic` or `Feature`.
    pub selected_epic: Option<String>,
    /// Set exactly while `view` is `Feature`.
    pub selected_feature: Option<String>,
    pub epic_index: usize,
    pub feature_index: usize,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    fn to_dashboard(mut self) -> Self {
        self.view = View::Dashboard;
        self.selected_epic = None;
        self.selected_feature = None;
        self
    }
}

fn is_back(key: Key) -> bool {
    matches!(key, Key::Esc | Key::Backspace | Key::Char('b'))
}

/// Compute the state that follows `key`, or [`Step::Stop`] to quit.
pub fn handle_key(state: &NavState, key: Key, model: &Model) -> Step {
    let mut next = state.clone();

    match key {
        // Help always returns to the dashboard, never to the view it was opened from.
        Key::Char('h') | Key::Char('?') => {
            let opening = state.view != View::Help;
            next = next.to_dashboard();
            if opening {
                next.view = View::Help;
            }
        },

        Key::Quit => match state.view {
            View::Dashboard | View::Help => return Step::Stop,
            View::Epic | View::Feature => next = next.to_dashboard(),
        },

        k if is_back(k) => match state.view {
            View::Help => next = next.to_dashboard(),
            View::Feature => {
                next.view = View::Epic;
                next.selected_feature = None;
            },
            View::Epic => next = next.to_dashboard(),
            View::Dashboard => {},
        },

        Key::Down | Key::Char('j') => match state.view {
            View::Dashboard => {
                let last = model.epics().len().saturating_sub(1);
                next.epic_index = (state.epic_index + 1).min(last);
            },
            View::Epic => {
                if let Some(epic) = state.selected_epic.as_deref().and_then(|n| model.epic(n)) {
                    let last = epic.total().saturating_sub(1);
                    next.feature_index = (state.feature_index + 1).min(last);
                }
            },
            _ => {},
        },

        Key::Up | Key::Char('k') => match state.view {
            View::Dashboard => next.epic_index = state.epic_index.saturating_sub(1),
            View::Epic => next.feature_index = state.feature_index.saturating_sub(1),
            _ => {},
        },

        Key::Enter | Key::Char('e') => {
            if state.view == View::Dashboard {
                let epics = model.epics();
                if !epics.is_empty() {
                    let index = state.epic_index.min(epics.len() - 1);
                    next.selected_epic = Some(epics[index].name.clone());
                    next.view = View::Epic;
                    next.feature_index = 0;
                }
            }
        },

        Key::Char('f') => {
            if state.view == View::Epic {
                if let Some(epic) = state.selected_epic.as_deref().and_then(|n| model.epic(n)) {
                    let features = model.epic_features_by_id(epic);
                    if let Some(feature) = features.get(state.feature_index.min(features.len().saturating_sub(1))) {
                        next.selected_feature = Some(feature.id.clone());
                        next.view = View::Feature;
                    }
                }
            }
        },

        _ => {},
    }

    Step::Continue(next)
}
