//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms so the spinner animates smoothly.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous
//! redraws.

mod component;
mod components;
mod event;
mod ui;

use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use log::{debug, info, warn};

use crate::completion::CompletionClient;
use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, MessageListState};
use crate::tui::event::{TuiEvent, poll_event, poll_event_immediate};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub message_list: MessageListState,
    pub input_box: InputBox,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show, // Show cursor for input editing
            SetCursorStyle::SteadyBlock,
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Run the chat UI until the user quits.
pub fn run(client: Arc<dyn CompletionClient>, model_name: String) -> std::io::Result<()> {
    let mut app = App::new(client, model_name);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background request tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            if matches!(event, TuiEvent::Quit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Scroll events always go to the message list
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
            ) {
                tui.message_list.handle_event(&event);
                continue;
            }

            // Everything else is editing input
            if let Some(InputEvent::Submit(text)) = tui.input_box.handle_event(&event) {
                match update(&mut app, Action::Submit(text.clone())) {
                    Effect::SpawnRequest(prompt) => spawn_request(&app, prompt, tx.clone()),
                    // Rejected (a request is already in flight): hand the
                    // typed text back instead of losing it.
                    Effect::None => tui.input_box.set_buffer(text),
                    Effect::Quit => should_quit = true,
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle actions from completed background requests
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => should_quit = true,
                Effect::SpawnRequest(prompt) => spawn_request(&app, prompt, tx.clone()),
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Spawn one background completion request. The result comes back on the
/// action channel as either `CompletionSucceeded` or `CompletionFailed`.
fn spawn_request(app: &App, prompt: String, tx: mpsc::Sender<Action>) {
    info!("Spawning completion request ({} bytes)", prompt.len());
    let client = app.client.clone();
    tokio::spawn(async move {
        let action = match client.complete(&prompt).await {
            Ok(text) => Action::CompletionSucceeded(text),
            Err(e) => Action::CompletionFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send completion result: receiver dropped");
        }
    });
}
