//! # Actions
//!
//! Everything that can happen in Quill becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The request finishes? That's `Action::CompletionSucceeded(text)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` for the adapter layer to execute.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  Effect
//! ```
//!
//! This makes everything testable: feed actions in, assert on the state and
//! the returned effect.

use log::warn;

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// User submitted input text.
    Submit(String),
    /// The in-flight request returned the full response text.
    CompletionSucceeded(String),
    /// The in-flight request failed; carries a display message.
    CompletionFailed(String),
    Quit,
}

/// Side effects requested by the reducer, executed by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Spawn one background request carrying exactly this prompt.
    SpawnRequest(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            if text.trim().is_empty() {
                return Effect::None;
            }
            if app.is_loading {
                // One outstanding request at a time. The submission is
                // rejected, not queued; the adapter keeps the typed text.
                app.status_message = String::from("Still waiting on the model...");
                return Effect::None;
            }
            app.transcript.push_user(text.clone());
            app.error = None;
            app.is_loading = true;
            app.status_message = String::from("Waiting for reply...");
            Effect::SpawnRequest(text)
        }
        Action::CompletionSucceeded(text) => {
            app.transcript.push_assistant(text);
            app.is_loading = false;
            app.status_message = String::from("Ready");
            Effect::None
        }
        Action::CompletionFailed(message) => {
            // The user turn stays; no assistant turn is appended for a
            // failed exchange.
            warn!("Completion failed: {}", message);
            app.is_loading = false;
            app.status_message = String::from("Request failed");
            app.error = Some(message);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
