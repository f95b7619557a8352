use crate::app::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::InputMode;

/// Handles a key in the form. Returns true when the app should quit.
pub(super) fn handle_edit_key(key: KeyEvent, app: &mut AppState, input_mode: &mut InputMode) -> bool {
    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_field();
        }
        KeyCode::F(1) => {
            *input_mode = InputMode::Help;
        }
        // The submit gesture; AppState drops it while a submission is in
        // flight, so holding Enter cannot double-submit.
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return false;
            }
            app.push_char(ch);
        }
        _ => {}
    }
    false
}

pub(super) fn handle_help_key(key: KeyEvent, input_mode: &mut InputMode) {
    if matches!(key.code, KeyCode::Esc | KeyCode::F(1)) {
        *input_mode = InputMode::Edit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::SubmissionJob;
    use crate::settings::AppSettings;
    use crossbeam_channel::Receiver;
    use std::time::Duration;
    use url::Url;

    fn test_app() -> (AppState, Receiver<SubmissionJob>) {
        let settings = AppSettings {
            endpoint: Url::parse("https://sho.rt").unwrap(),
            timeout: Duration::from_secs(10),
            refresh_hz: 10,
        };
        let (tx, rx) = crossbeam_channel::unbounded();
        (AppState::new(&settings, tx), rx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn printable_chars_edit_the_field() {
        let (mut app, _rx) = test_app();
        let mut mode = InputMode::Edit;

        for ch in "https://a.io".chars() {
            handle_edit_key(press(KeyCode::Char(ch)), &mut app, &mut mode);
        }
        handle_edit_key(press(KeyCode::Backspace), &mut app, &mut mode);

        assert_eq!(app.form_value, "https://a.i");
    }

    #[test]
    fn enter_dispatches_submit() {
        let (mut app, rx) = test_app();
        let mut mode = InputMode::Edit;
        app.form_value = "https://example.com".to_string();

        handle_edit_key(press(KeyCode::Enter), &mut app, &mut mode);

        assert!(app.submission.is_in_flight());
        assert!(matches!(
            rx.try_recv().expect("job"),
            SubmissionJob::Submit { .. }
        ));
    }

    #[test]
    fn esc_quits_and_f1_toggles_help() {
        let (mut app, _rx) = test_app();
        let mut mode = InputMode::Edit;

        assert!(handle_edit_key(press(KeyCode::Esc), &mut app, &mut mode));

        assert!(!handle_edit_key(press(KeyCode::F(1)), &mut app, &mut mode));
        assert_eq!(mode, InputMode::Help);
        handle_help_key(press(KeyCode::Esc), &mut mode);
        assert_eq!(mode, InputMode::Edit);
    }

    #[test]
    fn ctrl_u_clears_the_field() {
        let (mut app, _rx) = test_app();
        let mut mode = InputMode::Edit;
        app.form_value = "https://example.com".to_string();

        handle_edit_key(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            &mut app,
            &mut mode,
        );

        assert!(app.form_value.is_empty());
    }
}
