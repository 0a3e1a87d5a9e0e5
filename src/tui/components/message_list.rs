//! # MessageList Component
//!
//! Scrollable view of the conversation transcript.
//!
//! ## Responsibilities
//!
//! - Display the transcript as a stack of [`Message`] widgets
//! - Manage scrolling (stick-to-bottom, clamping, re-pinning)
//! - Perform efficient layout caching (per-turn heights)
//!
//! ## Architecture
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&'a mut MessageListState` (persistent state) and the transcript (props).
//!
//! Since `Component::render` takes `&mut self`, we can safely mutate the
//! state (including layout cache and scroll state) during the render pass,
//! aligning with Ratatui's `StatefulWidget` pattern.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::completion::Transcript;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::Message;
use crate::tui::event::TuiEvent;

/// Spinner glyphs cycled while a request is in flight.
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Extra canvas row used by the waiting indicator while loading.
const SPINNER_HEIGHT: u16 = 1;

/// Layout and scroll state for the message list.
/// Must be persisted in the parent TuiState.
pub struct MessageListState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Cached layout measurements
    pub layout: LayoutCache,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Set during render when there is content below the scroll position
    pub has_unseen_content: bool,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::new(),
            stick_to_bottom: true, // Start attached to bottom
            viewport_height: 0,
            has_unseen_content: false,
        }
    }

    fn max_scroll(&self) -> u16 {
        let total_content_height: u16 = self.layout.heights.iter().sum();
        total_content_height.saturating_sub(self.viewport_height)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    /// Prevents overscrolling past the last turn.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.max_scroll();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Clamp scroll and re-engage auto-scroll if the user has reached the
    /// bottom. Called on scroll-down events so that scrolling past the end
    /// re-pins to bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.max_scroll();
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// Scrollable conversation view component.
/// Created fresh each frame with references to state and data.
pub struct MessageList<'a> {
    // Mutable reference to persistent state
    pub state: &'a mut MessageListState,
    pub transcript: &'a Transcript,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl<'a> MessageList<'a> {
    pub fn new(
        state: &'a mut MessageListState,
        transcript: &'a Transcript,
        is_loading: bool,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            transcript,
            is_loading,
            spinner_frame,
        }
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let turns = self.transcript.turns();

        // 1. Update the layout cache. Turn content never mutates, so cached
        // heights stay valid until the width changes or the transcript resets.
        let layout = &mut self.state.layout;
        let reusable = layout.reusable_count(turns.len(), content_width);
        layout.heights.truncate(reusable.min(layout.heights.len()));

        for turn in turns.iter().skip(layout.heights.len()) {
            layout
                .heights
                .push(Message::calculate_height(turn, content_width));
        }
        layout.rebuild_prefix_heights();
        layout.update_metadata(turns.len(), content_width);

        let total_height: u16 = self.state.layout.heights.iter().sum();

        // Waiting indicator occupies one canvas row below the last turn
        let show_spinner = self.is_loading;
        let canvas_height = if show_spinner {
            total_height + SPINNER_HEIGHT
        } else {
            total_height
        };

        // 2. Clamp scroll offset to prevent overscrolling past content.
        // Skip when auto-scrolling: scroll_to_bottom targets canvas_height.
        self.state.viewport_height = area.height;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        let scroll_offset = self.state.scroll_state.offset().y;
        let visible_range = self.state.layout.visible_range(scroll_offset, area.height);

        // 3. Render visible turns into a ScrollView
        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = if visible_range.start > 0 {
            self.state.layout.prefix_heights[visible_range.start - 1]
        } else {
            0
        };

        for i in visible_range {
            let height = self.state.layout.heights[i];
            let turn_rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(Message::new(&turns[i]), turn_rect);
            y_offset += height;
        }

        if show_spinner {
            let glyph = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            let spinner_rect = Rect::new(0, total_height, content_width, SPINNER_HEIGHT);
            scroll_view.render_widget(
                Span::styled(
                    format!("{glyph} waiting for reply"),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ),
                spinner_rect,
            );
        }

        // Auto-scroll logic (mutation)
        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        // Render the ScrollView into the full viewport area
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);

        // 4. Update the unseen-content flag from the final scroll position
        let current_offset = self.state.scroll_state.offset().y;
        self.state.has_unseen_content =
            !self.state.stick_to_bottom && current_offset < self.state.max_scroll();
    }
}

/// EventHandler is implemented on `MessageListState` rather than
/// `MessageList` because event handling requires persistent state (scroll
/// position, stick_to_bottom flag) and `MessageList` is recreated each frame
/// with fresh props.
impl EventHandler for MessageListState {
    type Event = (); // MessageList currently emits no events (scroll handled internally)

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
                None
            }
            _ => None,
        }
    }
}

/// Cached layout measurements
pub struct LayoutCache {
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
    turn_count: usize,
    content_width: u16,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            turn_count: 0,
            content_width: 0,
        }
    }

    /// How many cached heights are still valid. Turns are append-only and
    /// immutable, so everything cached survives unless the width changed or
    /// the transcript somehow shrank.
    pub fn reusable_count(&self, turn_count: usize, content_width: u16) -> usize {
        if self.content_width != content_width || self.heights.is_empty() {
            return 0;
        }
        if turn_count < self.turn_count {
            return 0;
        }
        self.heights.len()
    }

    pub fn update_metadata(&mut self, turn_count: usize, content_width: u16) {
        self.turn_count = turn_count;
        self.content_width = content_width;
    }

    pub fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc += h;
                Some(*acc)
            })
            .collect();
    }

    /// Indices of turns that intersect the viewport, with a half-viewport
    /// buffer on each side so partial scrolls don't pop widgets in and out.
    pub fn visible_range(
        &self,
        scroll_offset: u16,
        viewport_height: u16,
    ) -> std::ops::Range<usize> {
        let buffer = viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(viewport_height)
            .saturating_add(buffer);

        let start = self
            .prefix_heights
            .partition_point(|&end| end <= buffered_start);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < buffered_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end
    }
}
