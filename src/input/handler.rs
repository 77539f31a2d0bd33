use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, Turn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Steer toward an absolute grid direction
    Play(Direction),
    /// Turn relative to the current heading
    Turn(Turn),
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Steering - arrow keys (row 0 renders at the top, so the
            // index-space directions line up with the visual ones)
            KeyCode::Up => KeyAction::Play(Direction::Up),
            KeyCode::Down => KeyAction::Play(Direction::Down),
            KeyCode::Left => KeyAction::Play(Direction::Left),
            KeyCode::Right => KeyAction::Play(Direction::Right),

            // Steering - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Play(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Play(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Play(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Play(Direction::Right),

            // Relative turns, the way an agent drives the snake
            KeyCode::Char('j') | KeyCode::Char('J') => KeyAction::Turn(Turn::Left),
            KeyCode::Char('k') | KeyCode::Char('K') => KeyAction::Turn(Turn::Right),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_arrows_steer_absolute() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Up)),
            KeyAction::Play(Direction::Up)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Right)),
            KeyAction::Play(Direction::Right)
        );
    }

    #[test]
    fn test_relative_turn_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('j'))),
            KeyAction::Turn(Turn::Left)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('k'))),
            KeyAction::Turn(Turn::Right)
        );
    }

    #[test]
    fn test_control_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key_event(key(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('r'))),
            KeyAction::Restart
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::F(5))),
            KeyAction::None
        );

        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }
}
