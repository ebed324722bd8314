//! Some code around handling events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{app::App, collection::Data};

/// Events sent to the main thread.
#[derive(Debug)]
pub enum PipetopEvent {
    Resize,
    KeyInput(KeyEvent),
    Update(Box<Data>),
}

/// Handle a [`KeyEvent`], returning true if the application should exit.
pub fn handle_key_event_or_break(event: KeyEvent, app: &mut App) -> bool {
    if event.modifiers.is_empty() {
        match event.code {
            KeyCode::Char('q') => return true,
            _ => {}
        }
    } else if let KeyModifiers::CONTROL = event.modifiers {
        match event.code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('r') => app.reset(),
            _ => {}
        }
    }

    false
}

#[cfg(test)]
mod test {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::handle_key_event_or_break;
    use crate::{app::App, options::AppConfigFields};

    fn test_app() -> App {
        App::new(AppConfigFields {
            update_rate_in_milliseconds: 500,
            pipe_path: "/tmp/sysmon_pipe".into(),
            history_capacity: 50,
            use_dot: false,
        })
    }

    #[test]
    fn q_and_ctrl_c_exit() {
        let mut app = test_app();
        assert!(handle_key_event_or_break(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            &mut app
        ));
        assert!(handle_key_event_or_break(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app
        ));
    }

    #[test]
    fn other_keys_keep_running() {
        let mut app = test_app();
        assert!(!handle_key_event_or_break(
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE),
            &mut app
        ));
        assert!(!handle_key_event_or_break(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            &mut app
        ));
    }
}
