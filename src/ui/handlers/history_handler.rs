//! Move list selection and time travel.

use crate::game::move_label;

use super::super::app::App;

/// Helper struct for browsing the move list and jumping through history.
pub struct HistoryHandler<'a> {
    app: &'a mut App,
}

impl<'a> HistoryHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn select_prev(&mut self) {
        self.app.selected_move = self.app.selected_move.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.app.selected_move + 1 < self.app.game.history().len() {
            self.app.selected_move += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.app.selected_move = 0;
    }

    pub fn select_last(&mut self) {
        self.app.selected_move = self.app.game.history().len() - 1;
    }

    /// Display the board at the selected history entry.
    pub fn jump_to_selected(&mut self) {
        let target = self.app.selected_move;

        if self.app.game.jump_to(target) {
            self.app.log(format!(
                "{}: {}",
                move_label(target),
                self.app.game.status_label()
            ));
        } else {
            self.app.log(format!("No move #{target} in history"));
            self.app.selected_move = self.app.game.current_move();
        }
    }
}
