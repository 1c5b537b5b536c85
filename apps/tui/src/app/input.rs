use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    None,
    Submit(String),
    Quit,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return InputAction::Quit;
    }

    // An open alert swallows input until acknowledged.
    if app.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_alert();
        }
        return InputAction::None;
    }

    match key.code {
        KeyCode::Esc => {
            app.running = false;
            InputAction::Quit
        }
        KeyCode::Enter => InputAction::Submit(app.username_input.clone()),
        KeyCode::Backspace => {
            app.username_input.pop();
            InputAction::None
        }
        KeyCode::Char(c) => {
            app.username_input.push(c);
            InputAction::None
        }
        _ => InputAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn new_app() -> Result<App, crate::config::ConfigError> {
        Ok(App::new(&AppConfig::from_lookup(|_| None)?))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_builds_username_and_enter_submits_raw_text() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = new_app()?;
        for c in " alicex".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Backspace));

        let action = handle_key(&mut app, press(KeyCode::Enter));

        assert_eq!(action, InputAction::Submit(" alice".to_string()));
        assert_eq!(app.username_input, " alice");
        Ok(())
    }

    #[test]
    fn alert_swallows_keys_until_dismissed() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = new_app()?;
        app.alert = Some("Enter a username to proceed".to_string());

        assert_eq!(handle_key(&mut app, press(KeyCode::Char('x'))), InputAction::None);
        assert!(app.username_input.is_empty());

        assert_eq!(handle_key(&mut app, press(KeyCode::Enter)), InputAction::None);
        assert!(app.alert.is_none());
        assert!(app.running);
        Ok(())
    }

    #[test]
    fn escape_and_ctrl_c_quit() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = new_app()?;
        assert_eq!(handle_key(&mut app, press(KeyCode::Esc)), InputAction::Quit);
        assert!(!app.running);

        let mut app = new_app()?;
        app.alert = Some("blocking".to_string());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut app, ctrl_c), InputAction::Quit);
        Ok(())
    }
}
