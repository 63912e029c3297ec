//! Board cursor and move play.

use crate::game::MoveOutcome;

use super::super::app::App;

/// Helper struct for moving the cursor and playing moves on the board.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn cursor_up(&mut self) {
        let (row, col) = self.app.cursor_position();
        if row > 0 {
            self.set_cursor(row - 1, col);
        }
    }

    pub fn cursor_down(&mut self) {
        let (row, col) = self.app.cursor_position();
        if row + 1 < self.app.game.grid_size() {
            self.set_cursor(row + 1, col);
        }
    }

    pub fn cursor_left(&mut self) {
        let (row, col) = self.app.cursor_position();
        if col > 0 {
            self.set_cursor(row, col - 1);
        }
    }

    pub fn cursor_right(&mut self) {
        let (row, col) = self.app.cursor_position();
        if col + 1 < self.app.game.grid_size() {
            self.set_cursor(row, col + 1);
        }
    }

    fn set_cursor(&mut self, row: usize, col: usize) {
        self.app.cursor = row * self.app.game.grid_size() + col;
    }

    /// Play the current player's mark at the cursor.
    pub fn play_at_cursor(&mut self) {
        let index = self.app.cursor;
        let (row, col) = self.app.cursor_position();

        match self.app.game.play_move(index) {
            MoveOutcome::Played(mark) => {
                self.app.selected_move = self.app.game.current_move();
                self.app.log(format!(
                    "Move #{}: {} at row {}, col {}",
                    self.app.game.current_move(),
                    mark,
                    row + 1,
                    col + 1
                ));

                if let Some(winner) = self.app.game.winner() {
                    self.app.log(format!("Winner: {winner}"));
                }
            }
            MoveOutcome::Occupied => {
                self.app
                    .log(format!("Cell at row {}, col {} is taken", row + 1, col + 1));
            }
            MoveOutcome::GameOver(winner) => {
                self.app.log(format!(
                    "{winner} has already won. Jump to an earlier move to play on"
                ));
            }
            MoveOutcome::OutOfRange => {
                self.app.log(format!("Cell {index} is off the board"));
            }
        }
    }

    /// Start a fresh game at the current size.
    pub fn restart(&mut self) {
        let size = self.app.game.grid_size();
        self.app.game.set_grid_size(size);
        self.app.cursor = 0;
        self.app.selected_move = 0;
        self.app.size_input = size.to_string();
        self.app.log(format!("Restarted {size}x{size} game"));
    }
}
