//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::completion::{CompletionClient, CompletionError};

/// A client that replays scripted responses in order. Once the script runs
/// out, every call returns `Ok("ok")`.
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<String, CompletionError>>>,
}

impl ScriptedClient {
    pub fn new(responses: Vec<Result<String, CompletionError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("ok".to_string()))
    }
}

/// Creates a test App with an unscripted client (every request answers "ok").
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(
        Arc::new(ScriptedClient::new(Vec::new())),
        "test-model".to_string(),
    )
}
