//! # InputBox Component
//!
//! Single-line text input at the bottom of the screen.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//! - Indicate when a request is in flight
//!
//! ## State Management
//!
//! The buffer, cursor position (a byte offset into the buffer), and
//! horizontal scroll are internal state. The `waiting` flag is a prop set
//! from application state each frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Text content or cursor changed
    ContentChanged,
}

/// Text input component.
///
/// The input is one visual line. Content wider than the box scrolls
/// horizontally so the cursor stays visible.
pub struct InputBox {
    /// Text buffer (internal state)
    pub buffer: String,
    /// Prop: a request is in flight, reflected in the title
    pub waiting: bool,
    /// Cursor position as a byte offset into `buffer`. Always on a char
    /// boundary.
    cursor: usize,
    /// Leftmost visible column when the buffer overflows the box
    scroll_cols: u16,
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos - 1;
    while !s.is_char_boundary(p) {
        p -= 1;
    }
    p
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos + 1;
    while p < s.len() && !s.is_char_boundary(p) {
        p += 1;
    }
    p
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            waiting: false,
            cursor: 0,
            scroll_cols: 0,
        }
    }

    /// Restore buffer contents, e.g. when a submission was rejected and the
    /// typed text is handed back. Cursor moves to the end.
    pub fn set_buffer(&mut self, text: String) {
        self.cursor = text.len();
        self.buffer = text;
    }

    /// Display column of the cursor (what the terminal shows, not bytes).
    fn cursor_col(&self) -> u16 {
        self.buffer[..self.cursor].width() as u16
    }

    /// Keep the cursor inside the visible window of `inner_width` columns.
    fn update_scroll(&mut self, inner_width: u16) {
        if inner_width == 0 {
            return;
        }
        let col = self.cursor_col();
        if col < self.scroll_cols {
            self.scroll_cols = col;
        } else if col >= self.scroll_cols + inner_width {
            self.scroll_cols = col - inner_width + 1;
        }
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Borders consume one column each side
        let inner_width = area.width.saturating_sub(2);
        self.update_scroll(inner_width);

        let title = if self.waiting {
            "Input (waiting...)"
        } else {
            "Input"
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .title(title);

        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .scroll((0, self.scroll_cols))
            .style(Style::default().fg(Color::Green));

        frame.render_widget(input, area);

        let cursor_x = area.x + 1 + self.cursor_col().saturating_sub(self.scroll_cols);
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // The input is one line; pasted line breaks become spaces
                let flattened: String = text
                    .replace("\r\n", " ")
                    .replace(['\n', '\r'], " ");
                self.buffer.insert_str(self.cursor, &flattened);
                self.cursor += flattened.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                if !self.buffer.trim().is_empty() {
                    let text = std::mem::take(&mut self.buffer);
                    self.cursor = 0;
                    self.scroll_cols = 0;
                    Some(InputEvent::Submit(text))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new();
        assert!(input.buffer.is_empty());
        assert!(!input.waiting);
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new();

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");

        input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = InputBox::new();
        for c in "héllo".chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        assert_eq!(input.buffer, "héllo");

        // Cursor walks back over the multibyte 'é' without panicking
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "hllo");

        input.handle_event(&TuiEvent::InputChar('é'));
        assert_eq!(input.buffer, "héllo");
    }

    #[test]
    fn test_delete_removes_forward() {
        let mut input = InputBox::new();
        input.set_buffer("abc".to_string());
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "bc");
    }

    #[test]
    fn test_home_and_end() {
        let mut input = InputBox::new();
        input.set_buffer("hello".to_string());

        assert_eq!(
            input.handle_event(&TuiEvent::CursorHome),
            Some(InputEvent::ContentChanged)
        );
        // Already at home: no-op
        assert_eq!(input.handle_event(&TuiEvent::CursorHome), None);

        assert_eq!(
            input.handle_event(&TuiEvent::CursorEnd),
            Some(InputEvent::ContentChanged)
        );
        assert_eq!(input.handle_event(&TuiEvent::CursorEnd), None);
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("one\ntwo\r\nthree".to_string()));
        assert_eq!(input.buffer, "one two three");
    }

    #[test]
    fn test_submit_returns_text_and_clears() {
        let mut input = InputBox::new();
        input.set_buffer("hello".to_string());

        let res = input.handle_event(&TuiEvent::Submit);
        assert_eq!(res, Some(InputEvent::Submit("hello".to_string())));
        assert!(input.buffer.is_empty(), "buffer cleared after submit");
    }

    #[test]
    fn test_submit_blank_is_noop() {
        let mut input = InputBox::new();
        input.set_buffer("   ".to_string());
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        // Whitespace stays in the buffer; it was not consumed
        assert_eq!(input.buffer, "   ");
    }

    #[test]
    fn test_set_buffer_restores_text() {
        let mut input = InputBox::new();
        input.set_buffer("rejected text".to_string());
        assert_eq!(input.buffer, "rejected text");

        // Typing continues from the end
        input.handle_event(&TuiEvent::InputChar('!'));
        assert_eq!(input.buffer, "rejected text!");
    }

    #[test]
    fn test_render_shows_waiting_title() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = InputBox::new();
        input.waiting = true;

        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("Input (waiting...)"));
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut input = InputBox::new();
        input.set_buffer("a".repeat(50));

        // 20 inner columns, cursor at column 50 → window slides right
        input.update_scroll(20);
        assert_eq!(input.scroll_cols, 31); // 50 - 20 + 1

        input.handle_event(&TuiEvent::CursorHome);
        input.update_scroll(20);
        assert_eq!(input.scroll_cols, 0);
    }
}
