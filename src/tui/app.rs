//! Application state for the terminal user interface.
//!
//! `App` ties the loaded [`Model`] to the navigation state and turns the
//! current view into one framed screen. It holds no terminal handles, so the
//! same frame is used by the interactive loop and by one-shot output.

use std::io;
use std::path::Path;

use ansi_to_tui::IntoText;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, text::Text, widgets::Paragraph, Frame, Terminal};

use crate::model::Model;
use crate::tui::{
    colors::Theme,
    enums::{Key, Step, View},
    frame::frame,
    input::decode_key,
    nav::{handle_key, NavState},
    style::strip_ansi,
    views,
};

/// Narrowest frame ever drawn.
pub const MIN_WIDTH: usize = 20;

pub struct App {
    model: Model,
    theme: Theme,
    state: NavState,
    source: String,
}

impl App {
    /// Create an app over `model`, labelled by the file name of `source`.
    pub fn new(model: Model, source: &Path) -> Self {
        let source = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.display().to_string());
        App {
            model,
            theme: Theme::default(),
            state: NavState::new(),
            source,
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    fn title(&self) -> String {
        match self.state.view {
            View::Dashboard => self.source.clone(),
            View::Epic => format!("epic: {}", self.state.selected_epic.as_deref().unwrap_or_default()),
            View::Feature => self.state.selected_feature.clone().unwrap_or_default(),
            View::Help => "help".to_string(),
        }
    }

    fn footer(&self) -> &'static str {
        match self.state.view {
            View::Dashboard => "[e]pic [h]elp [q]uit",
            View::Epic => "[f]eature [b]ack [h]elp [q]uit",
            View::Feature => "[b]ack [h]elp [q]uit",
            View::Help => "[b]ack [q]uit",
        }
    }

    /// Render the current view as framed, styled lines.
    pub fn frame(&self, width: usize, height: usize) -> Vec<String> {
        let width = width.max(MIN_WIDTH);
        let (model, state, theme) = (&self.model, &self.state, &self.theme);
        let body = match state.view {
            View::Dashboard => views::dashboard(model, state, width, height, theme),
            View::Epic => views::epic(model, state, width, height, theme),
            View::Feature => views::feature(model, state, width, height, theme),
            View::Help => views::help(width, height, theme),
        };
        frame(&body, width, Some(&self.title()), Some(self.footer()), theme)
    }

    /// Feed one key to the state machine. Returns false once the user quits.
    pub fn apply(&mut self, key: Key) -> bool {
        match handle_key(&self.state, key, &self.model) {
            Step::Continue(next) => {
                if next != self.state {
                    tracing::debug!(?key, from = ?self.state.view, to = ?next.view, "navigation");
                }
                self.state = next;
                true
            },
            Step::Stop => {
                tracing::debug!(?key, "quit requested");
                false
            },
        }
    }

    fn render(&self, f: &mut Frame) {
        let area = f.area();
        let content = self.frame(area.width as usize, area.height as usize).join("\n");
        let text: Text = content.into_text().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "unparseable styling, drawing plain text");
            Text::raw(strip_ansi(&content))
        });
        f.render_widget(Paragraph::new(text), area);
    }

    /// Main event loop: draw, then block for the next event.
    ///
    /// Resize events fall through to the next draw, which re-reads the size.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            match event::read()? {
                Event::Key(event) => {
                    if let Some(key) = decode_key(event) {
                        if !self.apply(key) {
                            break;
                        }
                    }
                },
                Event::Resize(width, height) => tracing::debug!(width, height, "resize"),
                _ => {},
            }
        }
        Ok(())
    }
}
