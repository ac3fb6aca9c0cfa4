//! Colour and glyph tables for the dashboard.
//!
//! Colours are xterm 256-colour palette indices. A single [`Theme`] is built
//! at startup and handed to every renderer by reference.

use crate::fields::Status;

/// Palette and status tables shared by all views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Filled portion of progress and spark bars.
    pub progress: u8,
    /// Empty bar cells, secondary text, section rules.
    pub muted: u8,
    /// Epic names and selection cursors.
    pub epic: u8,
    /// Dependency and unlock hints.
    pub dep: u8,
    /// Frame border.
    pub border: u8,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            progress: 34,
            muted: 240,
            epic: 39,
            dep: 213,
            border: 237,
        }
    }
}

impl Theme {
    /// Glyph drawn next to a feature with this status.
    pub fn status_symbol(&self, status: Status) -> char {
        match status {
            Status::Done | Status::Complete => '✓',
            Status::InProgress => '◉',
            Status::Pending => '○',
            Status::Abandoned => '✗',
            Status::Superseded => '↷',
            Status::Unknown => '?',
        }
    }

    /// Colour for a status, `None` for statuses drawn unstyled.
    pub fn status_color(&self, status: Status) -> Option<u8> {
        match status {
            Status::Done | Status::Complete => Some(34),
            Status::InProgress => Some(33),
            Status::Pending => Some(245),
            Status::Abandoned | Status::Superseded => Some(238),
            Status::Unknown => None,
        }
    }
}
