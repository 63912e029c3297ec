//! Keyboard dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::{app::App, types::Focus};
use super::{GameHandler, GridSizeHandler, HistoryHandler};

/// Helper struct for routing key presses to the focused panel.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q' | 'c' | 'C'), KeyModifiers::CONTROL) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Char('n' | 'N'), KeyModifiers::CONTROL) => {
                GameHandler::new(self.app).restart();
            }

            (KeyCode::Tab, _) => {
                self.app.focus = self.app.focus.next();
            }

            (KeyCode::BackTab, _) => {
                self.app.focus = self.app.focus.prev();
            }

            _ => match self.app.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::Moves => self.handle_moves_key(key),
                Focus::GridSize => self.handle_grid_size_key(key),
            },
        }

        false
    }

    fn handle_board_key(&mut self, key: KeyEvent) {
        let mut handler = GameHandler::new(self.app);

        match key.code {
            KeyCode::Up => handler.cursor_up(),
            KeyCode::Down => handler.cursor_down(),
            KeyCode::Left => handler.cursor_left(),
            KeyCode::Right => handler.cursor_right(),
            KeyCode::Enter | KeyCode::Char(' ') => handler.play_at_cursor(),
            _ => {}
        }
    }

    fn handle_moves_key(&mut self, key: KeyEvent) {
        let mut handler = HistoryHandler::new(self.app);

        match key.code {
            KeyCode::Up => handler.select_prev(),
            KeyCode::Down => handler.select_next(),
            KeyCode::Home => handler.select_first(),
            KeyCode::End => handler.select_last(),
            KeyCode::Enter => handler.jump_to_selected(),
            _ => {}
        }
    }

    fn handle_grid_size_key(&mut self, key: KeyEvent) {
        let mut handler = GridSizeHandler::new(self.app);

        match key.code {
            KeyCode::Up | KeyCode::Char('+') => handler.increment(),
            KeyCode::Down | KeyCode::Char('-') => handler.decrement(),
            KeyCode::Enter => handler.submit(),
            KeyCode::Backspace => handler.pop_char(),
            KeyCode::Char(c) => handler.push_char(c),
            _ => {}
        }
    }
}
