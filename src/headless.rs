//! Non-interactive play: apply a list of moves and report the final position.

use anyhow::{Context, Result};
use tracing::warn;

use crate::game::{GameController, MoveOutcome};

/// Play `moves` in order on a fresh `grid_size` game.
///
/// Returns the controller and a note for every move that was ignored.
pub fn play(grid_size: usize, moves: &[usize]) -> (GameController, Vec<String>) {
    let mut game = GameController::new(grid_size);
    let mut notes = Vec::new();

    for (turn, &index) in moves.iter().enumerate() {
        let note = match game.play_move(index) {
            MoveOutcome::Played(_) => continue,
            MoveOutcome::Occupied => format!("move {} ignored: cell {index} is occupied", turn + 1),
            MoveOutcome::GameOver(winner) => {
                format!("move {} ignored: {winner} has already won", turn + 1)
            }
            MoveOutcome::OutOfRange => format!(
                "move {} ignored: cell {index} is outside the {n}x{n} grid",
                turn + 1,
                n = game.grid_size()
            ),
        };
        warn!("{}", note);
        notes.push(note);
    }

    (game, notes)
}

/// Text report: board rows followed by the status line.
pub fn render_text(game: &GameController) -> String {
    format!("{}{}\n", game.current_board(), game.status_label())
}

pub fn render_json(game: &GameController) -> Result<String> {
    serde_json::to_string_pretty(&game.snapshot()).context("failed to serialize game state")
}
