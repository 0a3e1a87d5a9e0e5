use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::completion::{Role, Turn};
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless component that renders a single transcript turn with
/// role-based styling.
///
/// `Message` is a **transient component**: it's created fresh each frame with
/// the turn it needs to render and holds no mutable state.
///
/// # Styling
///
/// - **User** (cyan): what the human typed
/// - **Assistant** (green): the model's reply
///
/// # Height Calculation
///
/// [`calculate_height`](Self::calculate_height) predicts rendered height
/// using `textwrap` with options that match Ratatui's `Paragraph` wrapping.
/// This lets the parent `MessageList` compute scroll positions without
/// actually rendering each turn.
#[derive(Clone, Copy)]
pub struct Message<'a> {
    /// The turn to render
    pub turn: &'a Turn,
}

impl<'a> Message<'a> {
    pub fn new(turn: &'a Turn) -> Self {
        Self { turn }
    }

    /// Calculate the height required for this turn given a width.
    ///
    /// The wrapping options must match the Ratatui default for `Paragraph`
    /// to ensure 1:1 mapping between calculated and actual height.
    pub fn calculate_height(turn: &Turn, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Degenerate case: terminal too narrow for borders + padding.
            // Return 1 row so the turn still occupies space in the layout.
            return 1;
        }

        let content = turn.content.trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        // Ensure at least 1 content line even if textwrap returns empty
        (lines.len() as u16).max(1) + VERTICAL_OVERHEAD
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "you",
        Role::Assistant => "quill",
    }
}

fn role_style(role: Role) -> Style {
    match role {
        Role::User => Style::default().fg(Color::Cyan),
        Role::Assistant => Style::default().fg(Color::Green),
    }
}

// Implement Widget for easy usage in ScrollView
impl<'a> Widget for Message<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let style = role_style(self.turn.role);
        let border_style = style.add_modifier(Modifier::DIM);

        let content = self.turn.content.trim();

        // Render the block into `area`, then the paragraph into the inner rect.
        let block = Block::bordered()
            .title(role_label(self.turn.role))
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let paragraph = Paragraph::new(content)
            .style(style)
            .wrap(Wrap { trim: true });

        paragraph.render(inner_area, buf);
    }
}

/// `Message` is stateless, so the `&mut self` required by the trait is a
/// no-op; rendering is delegated to the [`Widget`] implementation.
impl<'a> Component for Message<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_turn(role: Role, content: &str) -> Turn {
        Turn {
            role,
            content: content.to_string(),
        }
    }

    // ==========================================================================
    // calculate_height tests
    // ==========================================================================

    #[test]
    fn calculate_height_empty_content_returns_border_height() {
        let turn = make_turn(Role::User, "");
        assert_eq!(Message::calculate_height(&turn, 80), VERTICAL_OVERHEAD);
    }

    #[test]
    fn calculate_height_whitespace_only_treated_as_empty() {
        let turn = make_turn(Role::User, "   \n\t  ");
        assert_eq!(Message::calculate_height(&turn, 80), VERTICAL_OVERHEAD);
    }

    #[test]
    fn calculate_height_zero_width_returns_minimum() {
        let turn = make_turn(Role::User, "Hello world");
        // Width 0: no room for borders + padding → degenerate fallback of 1 row
        assert_eq!(Message::calculate_height(&turn, 0), 1);
    }

    #[test]
    fn calculate_height_width_equals_overhead_returns_minimum() {
        let turn = make_turn(Role::User, "Hello world");
        assert_eq!(Message::calculate_height(&turn, HORIZONTAL_OVERHEAD), 1);
    }

    #[test]
    fn calculate_height_single_line_fits() {
        let turn = make_turn(Role::User, "Hello");
        // "Hello" (5 chars) fits in width 80 - HORIZONTAL_OVERHEAD = 76
        assert_eq!(Message::calculate_height(&turn, 80), 1 + VERTICAL_OVERHEAD);
    }

    #[test]
    fn calculate_height_wraps_at_width_boundary() {
        let turn = make_turn(Role::User, "Hello world");
        // "Hello world" = 11 chars, width 9 → content_width = 5
        // Wraps to: "Hello" | "world" = 2 lines
        assert_eq!(Message::calculate_height(&turn, 9), 2 + VERTICAL_OVERHEAD);
    }

    #[test]
    fn calculate_height_breaks_long_words() {
        let turn = make_turn(Role::User, "abcdefghij");
        // "abcdefghij" = 10 chars, width 8 → content_width = 4
        // Breaks to: "abcd" | "efgh" | "ij" = 3 lines
        assert_eq!(Message::calculate_height(&turn, 8), 3 + VERTICAL_OVERHEAD);
    }

    // ==========================================================================
    // Style tests
    // ==========================================================================

    #[test]
    fn style_user_is_cyan() {
        assert_eq!(role_style(Role::User).fg, Some(Color::Cyan));
        assert_eq!(role_label(Role::User), "you");
    }

    #[test]
    fn style_assistant_is_green() {
        assert_eq!(role_style(Role::Assistant).fg, Some(Color::Green));
        assert_eq!(role_label(Role::Assistant), "quill");
    }
}
