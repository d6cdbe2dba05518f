//! Translation of terminal input into form commands.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use processor_core::input::InputEdit;
use std::time::Duration;

/// Which part of the form receives plain keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Fields,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Quit,
    Submit,
    ToggleTheme,
    SwitchFocus,
    Edit(InputEdit),
    CursorUp,
    CursorDown,
    ToggleField,
    SelectAllFields,
    ClearFields,
    None,
}

#[derive(Clone)]
pub struct EventHandler {
    timeout: Duration,
}

impl EventHandler {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Wait up to the poll timeout for the next event.
    pub fn next_event(&self, focus: Focus) -> std::io::Result<AppEvent> {
        if !crossterm::event::poll(self.timeout)? {
            return Ok(AppEvent::None);
        }
        let event = match crossterm::event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key, focus),
            Event::Paste(text) if focus == Focus::Input => AppEvent::Edit(InputEdit::Paste(text)),
            _ => AppEvent::None,
        };
        Ok(event)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(50))
    }
}

pub fn map_key(key: KeyEvent, focus: Focus) -> AppEvent {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return AppEvent::Quit,
        KeyCode::Char('c') if ctrl => return AppEvent::Quit,
        KeyCode::Char('s') if ctrl => return AppEvent::Submit,
        KeyCode::F(5) => return AppEvent::Submit,
        KeyCode::Char('t') if ctrl => return AppEvent::ToggleTheme,
        KeyCode::Char('l') if ctrl => return AppEvent::Edit(InputEdit::Clear),
        KeyCode::Tab | KeyCode::BackTab => return AppEvent::SwitchFocus,
        _ => {}
    }

    match focus {
        Focus::Input => match key.code {
            KeyCode::Enter => AppEvent::Edit(InputEdit::Newline),
            KeyCode::Backspace => AppEvent::Edit(InputEdit::Backspace),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                AppEvent::Edit(InputEdit::Insert(c))
            }
            _ => AppEvent::None,
        },
        Focus::Fields => match key.code {
            KeyCode::Up | KeyCode::Char('k') => AppEvent::CursorUp,
            KeyCode::Down | KeyCode::Char('j') => AppEvent::CursorDown,
            KeyCode::Char(' ') | KeyCode::Enter => AppEvent::ToggleField,
            KeyCode::Char('a') => AppEvent::SelectAllFields,
            KeyCode::Char('n') => AppEvent::ClearFields,
            _ => AppEvent::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_global_keys_work_in_both_focuses() {
        for focus in [Focus::Input, Focus::Fields] {
            assert_eq!(map_key(ctrl('s'), focus), AppEvent::Submit);
            assert_eq!(map_key(key(KeyCode::F(5)), focus), AppEvent::Submit);
            assert_eq!(map_key(ctrl('c'), focus), AppEvent::Quit);
            assert_eq!(map_key(key(KeyCode::Esc), focus), AppEvent::Quit);
            assert_eq!(map_key(ctrl('t'), focus), AppEvent::ToggleTheme);
            assert_eq!(map_key(key(KeyCode::Tab), focus), AppEvent::SwitchFocus);
        }
    }

    #[test]
    fn test_typing_goes_to_input() {
        assert_eq!(
            map_key(key(KeyCode::Char('q')), Focus::Input),
            AppEvent::Edit(InputEdit::Insert('q'))
        );
        assert_eq!(
            map_key(
                KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT),
                Focus::Input
            ),
            AppEvent::Edit(InputEdit::Insert('A'))
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), Focus::Input),
            AppEvent::Edit(InputEdit::Newline)
        );
        assert_eq!(
            map_key(key(KeyCode::Backspace), Focus::Input),
            AppEvent::Edit(InputEdit::Backspace)
        );
        assert_eq!(map_key(ctrl('x'), Focus::Input), AppEvent::None);
    }

    #[test]
    fn test_selector_navigation() {
        assert_eq!(map_key(key(KeyCode::Up), Focus::Fields), AppEvent::CursorUp);
        assert_eq!(
            map_key(key(KeyCode::Char('j')), Focus::Fields),
            AppEvent::CursorDown
        );
        assert_eq!(
            map_key(key(KeyCode::Char(' ')), Focus::Fields),
            AppEvent::ToggleField
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), Focus::Fields),
            AppEvent::ToggleField
        );
        assert_eq!(map_key(key(KeyCode::Char('x')), Focus::Fields), AppEvent::None);
    }

    #[test]
    fn test_bulk_selection_keys() {
        assert_eq!(
            map_key(key(KeyCode::Char('a')), Focus::Fields),
            AppEvent::SelectAllFields
        );
        assert_eq!(
            map_key(key(KeyCode::Char('n')), Focus::Fields),
            AppEvent::ClearFields
        );
        assert_eq!(
            map_key(key(KeyCode::Char('a')), Focus::Input),
            AppEvent::Edit(InputEdit::Insert('a'))
        );
    }
}
