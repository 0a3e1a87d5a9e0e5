//! # Application State
//!
//! Core business state for Quill. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── client: Arc<dyn CompletionClient>  // completion backend
//! ├── transcript: Transcript             // ordered conversation turns
//! ├── status_message: String             // status bar text
//! ├── model_name: String                 // current model
//! ├── is_loading: bool                   // a request is in flight
//! └── error: Option<String>              // last failed exchange
//! ```
//!
//! `is_loading == false` is the idle state; `true` means exactly one
//! completion request is outstanding.
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::completion::{CompletionClient, Transcript};
use std::sync::Arc;

pub struct App {
    pub client: Arc<dyn CompletionClient>,
    pub transcript: Transcript,
    pub status_message: String,
    pub model_name: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl App {
    pub fn new(client: Arc<dyn CompletionClient>, model_name: String) -> Self {
        Self {
            client,
            transcript: Transcript::new(),
            status_message: String::from("Welcome to Quill!"),
            model_name,
            is_loading: false,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Quill!");
        assert!(!app.is_loading);
        assert!(app.transcript.is_empty());
        assert!(app.error.is_none());
        assert_eq!(app.model_name, "test-model");
    }
}
