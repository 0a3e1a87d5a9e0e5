//! # TitleBar Component
//!
//! Top status bar showing application state and notifications.
//!
//! ## Responsibilities
//!
//! - Display current model name
//! - Display status messages (e.g., "Waiting for reply...")
//! - Display the last request error, if any
//! - Show "↓ New" indicator when there's unseen content below scroll
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state, which makes it trivial to test: construct, render into
//! a `TestBackend`, and check the text.
//!
//! Props come from different owners. `model_name`, `status_message`, and
//! `error` live in core App state; `has_unseen_content` is TUI scroll state.
//! The TitleBar doesn't care where they come from.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

/// Top status bar component showing model name, status, errors, and the
/// unseen-content indicator.
pub struct TitleBar {
    /// Current model name (e.g., "gemini-2.5-flash")
    pub model_name: String,
    /// Status message (e.g., "Ready", "Waiting for reply...")
    pub status_message: String,
    /// Error from the most recent failed request, cleared on resubmit
    pub error: Option<String>,
    /// Whether there's content below the current scroll position
    pub has_unseen_content: bool,
}

impl TitleBar {
    pub fn new(
        model_name: String,
        status_message: String,
        error: Option<String>,
        has_unseen_content: bool,
    ) -> Self {
        Self {
            model_name,
            status_message,
            error,
            has_unseen_content,
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line of spans.
    ///
    /// Always height 1. Shows, left to right: model name, status message
    /// (if any), error (if any, in red), and the "↓ New" indicator.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(format!("Quill (model: {})", self.model_name))];

        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }

        if let Some(error) = &self.error {
            spans.push(Span::styled(
                format!(" | error: {error}"),
                Style::default().fg(Color::Red),
            ));
        }

        if self.has_unseen_content {
            spans.push(Span::raw(" | ↓ New"));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
