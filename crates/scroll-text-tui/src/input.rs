use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Same as pressing the hardware key
    TogglePause,
    CycleMode,
    ToggleDirection,
    Faster,
    Slower,
    Wider,
    Narrower,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char(' ') | KeyCode::Enter => Action::TogglePause,
        KeyCode::Char('m') => Action::CycleMode,
        KeyCode::Char('d') => Action::ToggleDirection,
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Action::Faster,
        KeyCode::Char('-') | KeyCode::Down => Action::Slower,
        KeyCode::Char('>') | KeyCode::Right => Action::Wider,
        KeyCode::Char('<') | KeyCode::Left => Action::Narrower,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_bindings() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char(' '))), Action::TogglePause);
        assert_eq!(handle_key_event(key(KeyCode::Char('m'))), Action::CycleMode);
        assert_eq!(handle_key_event(key(KeyCode::Right)), Action::Wider);
        assert_eq!(handle_key_event(key(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(event), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char('c'))), Action::None);
    }
}
