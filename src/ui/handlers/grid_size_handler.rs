//! Grid size field: typed entry and up/down stepping.

use crate::board::{MAX_GRID_SIZE, MIN_GRID_SIZE};

use super::super::{app::App, types::InputStatus};

const MAX_INPUT_LEN: usize = 2;

/// Helper struct for editing and applying the grid size.
pub struct GridSizeHandler<'a> {
    app: &'a mut App,
}

impl<'a> GridSizeHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_digit() && self.app.size_input.len() < MAX_INPUT_LEN {
            self.app.size_input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.app.size_input.pop();
    }

    /// Apply the typed size if it is valid.
    pub fn submit(&mut self) {
        match self.app.size_input_status() {
            InputStatus::Valid(size) => self.apply(size),
            InputStatus::Invalid(reason) => {
                self.app
                    .log(format!("Grid size rejected: {:?} ({reason})", self.app.size_input));
            }
            InputStatus::Incomplete => {}
        }
    }

    /// Step the size by one within bounds and apply it straight away.
    pub fn increment(&mut self) {
        let size = self.app.game.grid_size();
        if size < MAX_GRID_SIZE {
            self.apply(size + 1);
        }
    }

    pub fn decrement(&mut self) {
        let size = self.app.game.grid_size();
        if size > MIN_GRID_SIZE {
            self.apply(size - 1);
        }
    }

    fn apply(&mut self, size: usize) {
        self.app.game.set_grid_size(size);

        let applied = self.app.game.grid_size();
        self.app.cursor = 0;
        self.app.selected_move = 0;
        self.app.size_input = applied.to_string();
        self.app
            .log(format!("Grid size set to {applied}x{applied}, history cleared"));
    }
}
