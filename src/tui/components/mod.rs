//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! Components follow two patterns:
//!
//! - **Stateless (props-based)**: simple display components that receive all
//!   data as struct fields and render it. `TitleBar`, `Message`.
//! - **Stateful (event-driven)**: components that manage local state and emit
//!   events. `InputBox`, `MessageList`.
//!
//! Each component file is self-contained: state types, event types, rendering
//! logic, event handling, and tests all live together. You can read one file
//! to understand how a component works.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── message.rs       (Single turn renderer)
//! ├── message_list.rs  (Scrollable transcript container)
//! └── input_box.rs     (Single-line text input)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod input_box;
pub mod message;
pub use input_box::{InputBox, InputEvent};
pub mod message_list;
pub use message_list::{MessageList, MessageListState};
