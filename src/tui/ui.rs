use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{MessageList, TitleBar};

/// Compose the full screen: title bar, transcript, input box.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, main_area, input_area] = layout.areas(frame.area());

    // Transcript renders first so the title bar sees the scroll position
    // computed for this frame.
    let mut message_list = MessageList::new(
        &mut tui.message_list,
        &app.transcript,
        app.is_loading,
        spinner_frame,
    );
    message_list.render(frame, main_area);

    let mut title_bar = TitleBar::new(
        app.model_name.clone(),
        app.status_message.clone(),
        app.error.clone(),
        tui.message_list.has_unseen_content,
    );
    title_bar.render(frame, title_area);

    tui.input_box.waiting = app.is_loading;
    tui.input_box.render(frame, input_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_empty_app() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let mut tui = TuiState::new();

        terminal
            .draw(|f| {
                draw_ui(f, &app, &mut tui, 0);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Quill (model: test-model)"));
        assert!(text.contains("Input"));
    }

    #[test]
    fn test_draw_ui_shows_transcript_turns() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        update(&mut app, Action::Submit("What is Rust?".to_string()));
        update(
            &mut app,
            Action::CompletionSucceeded("A systems language.".to_string()),
        );
        let mut tui = TuiState::new();

        terminal
            .draw(|f| {
                draw_ui(f, &app, &mut tui, 0);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("What is Rust?"));
        assert!(text.contains("A systems language."));
        assert!(text.contains("you"));
        assert!(text.contains("quill"));
    }

    #[test]
    fn test_draw_ui_waiting_state() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        update(&mut app, Action::Submit("question".to_string()));
        let mut tui = TuiState::new();

        terminal
            .draw(|f| {
                draw_ui(f, &app, &mut tui, 3);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Waiting for reply..."));
        assert!(text.contains("Input (waiting...)"));
        assert!(text.contains("waiting for reply"));
    }
}
