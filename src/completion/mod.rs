//! # Completion Layer
//!
//! The seam between Quill and the hosted model service. The rest of the
//! crate only sees the [`CompletionClient`] trait; the Gemini wire format
//! lives entirely inside [`gemini`].

pub mod client;
pub mod gemini;
pub mod types;

pub use client::{CompletionClient, CompletionError};
pub use gemini::GeminiClient;
pub use types::{Role, Transcript, Turn};
