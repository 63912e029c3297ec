//! Game state: move history with a cursor, and everything derived from it.

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    board::{Board, Cell, DEFAULT_GRID_SIZE, Mark, clamp_grid_size},
    win::{self, Line},
};

/// What happened to a `play_move` request. Ignored moves leave state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Played(Mark),
    Occupied,
    GameOver(Mark),
    OutOfRange,
}

impl MoveOutcome {
    pub fn was_played(&self) -> bool {
        matches!(self, MoveOutcome::Played(_))
    }
}

/// Derived game status of the displayed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { next: Mark },
    Won(Mark),
}

impl GameStatus {
    pub fn label(&self) -> String {
        match self {
            GameStatus::Won(mark) => format!("Winner: {mark}"),
            GameStatus::InProgress { next } => format!("Next player: {next}"),
        }
    }
}

/// Owns the grid size, the board history and the current move pointer.
///
/// `history[0]` is always the empty board and `current_move` always indexes
/// into `history`. Turn, board, winner and status are computed on read.
#[derive(Debug, Clone)]
pub struct GameController {
    grid_size: usize,
    history: Vec<Board>,
    current_move: usize,
}

impl GameController {
    pub fn new(grid_size: usize) -> Self {
        let grid_size = clamp_grid_size(grid_size);
        Self {
            grid_size,
            history: vec![Board::empty(grid_size)],
            current_move: 0,
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// X moves on even positions, O on odd ones.
    pub fn is_x_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    pub fn next_mark(&self) -> Mark {
        if self.is_x_next() { Mark::X } else { Mark::O }
    }

    pub fn winner(&self) -> Option<Mark> {
        win::detect(self.current_board().cells(), self.grid_size)
    }

    /// Indices of the completed line on the displayed board.
    pub fn winning_line(&self) -> Option<Line> {
        win::winning_line(self.current_board().cells(), self.grid_size).map(|(_, line)| line)
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(mark) => GameStatus::Won(mark),
            None => GameStatus::InProgress {
                next: self.next_mark(),
            },
        }
    }

    /// "Winner: X" or "Next player: O".
    pub fn status_label(&self) -> String {
        self.status().label()
    }

    /// One label per history entry, for the move list.
    pub fn move_labels(&self) -> Vec<String> {
        (0..self.history.len()).map(move_label).collect()
    }

    /// Place the current player's mark at `index`.
    ///
    /// Occupied cells, out-of-range indices and moves after a win are ignored.
    /// Playing from an earlier history position discards every later entry.
    pub fn play_move(&mut self, index: usize) -> MoveOutcome {
        let board = self.current_board();

        if index >= board.len() {
            debug!(index, "move ignored: out of range");
            return MoveOutcome::OutOfRange;
        }
        if let Some(mark) = self.winner() {
            debug!(index, winner = %mark, "move ignored: game already won");
            return MoveOutcome::GameOver(mark);
        }
        if !board.is_vacant(index) {
            debug!(index, "move ignored: cell occupied");
            return MoveOutcome::Occupied;
        }

        let mark = self.next_mark();
        let next = board.with_mark(index, mark);

        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        info!(
            index,
            mark = %mark,
            discarded,
            history_len = self.history.len(),
            "move played"
        );
        MoveOutcome::Played(mark)
    }

    /// Show the board at `move_index`. Returns false and does nothing when the
    /// index is outside the history.
    pub fn jump_to(&mut self, move_index: usize) -> bool {
        if move_index >= self.history.len() {
            debug!(
                move_index,
                history_len = self.history.len(),
                "jump ignored: out of range"
            );
            return false;
        }

        self.current_move = move_index;
        info!(move_index, "jumped to move");
        true
    }

    /// Start over on a fresh board. The size is clamped to the playable range.
    pub fn set_grid_size(&mut self, new_size: usize) {
        let applied = clamp_grid_size(new_size);
        if applied != new_size {
            debug!(requested = new_size, applied, "grid size clamped");
        }

        self.grid_size = applied;
        self.history = vec![Board::empty(applied)];
        self.current_move = 0;
        info!(grid_size = applied, "grid size set, history reset");
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid_size: self.grid_size,
            current_move: self.current_move,
            history_len: self.history.len(),
            board: self.current_board().cells().to_vec(),
            next_player: self.next_mark(),
            winner: self.winner(),
            status: self.status_label(),
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

/// Label for the history entry at `index`.
pub fn move_label(index: usize) -> String {
    if index == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{index}")
    }
}

/// Serializable view of the displayed position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub grid_size: usize,
    pub current_move: usize,
    pub history_len: usize,
    pub board: Vec<Cell>,
    pub next_player: Mark,
    pub winner: Option<Mark>,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{MAX_GRID_SIZE, MIN_GRID_SIZE};

    fn play_all(game: &mut GameController, moves: &[usize]) {
        for &index in moves {
            assert!(game.play_move(index).was_played(), "move {index} rejected");
        }
    }

    #[test]
    fn test_fresh_game_for_every_size() {
        for size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
            let game = GameController::new(size);
            assert_eq!(game.grid_size(), size);
            assert_eq!(game.history().len(), 1);
            assert_eq!(game.current_move(), 0);
            assert!(game.is_x_next());
            assert!(game.current_board().is_blank());
            assert_eq!(game.current_board().len(), size * size);
        }
    }

    #[test]
    fn test_default_is_three_by_three() {
        let game = GameController::default();
        assert_eq!(game.grid_size(), 3);
        assert_eq!(game.status_label(), "Next player: X");
    }

    #[test]
    fn test_play_move_appends_and_alternates() {
        let mut game = GameController::new(3);

        assert_eq!(game.play_move(4), MoveOutcome::Played(Mark::X));
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current_move(), 1);
        assert!(!game.is_x_next());
        assert_eq!(game.status_label(), "Next player: O");

        assert_eq!(game.play_move(0), MoveOutcome::Played(Mark::O));
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.current_move(), 2);
        assert_eq!(game.current_board().get(0), Some(Mark::O));
        assert_eq!(game.current_board().get(4), Some(Mark::X));
    }

    #[test]
    fn test_history_entries_differ_by_one_cell() {
        let mut game = GameController::new(4);
        play_all(&mut game, &[0, 5, 10, 3, 15]);

        for pair in game.history().windows(2) {
            let changed = pair[0]
                .cells()
                .iter()
                .zip(pair[1].cells())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(changed, 1);
        }
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut game = GameController::new(3);
        game.play_move(4);
        let before = game.history().to_vec();

        assert_eq!(game.play_move(4), MoveOutcome::Occupied);
        assert_eq!(game.history(), before.as_slice());
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_moves_after_win_are_ignored() {
        let mut game = GameController::new(3);
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(game.winner(), Some(Mark::X));
        assert_eq!(game.status_label(), "Winner: X");

        let before = game.history().to_vec();
        assert_eq!(game.play_move(8), MoveOutcome::GameOver(Mark::X));
        assert_eq!(game.history(), before.as_slice());
        assert_eq!(game.current_move(), 5);
    }

    #[test]
    fn test_out_of_range_move_is_ignored() {
        let mut game = GameController::new(3);
        assert_eq!(game.play_move(9), MoveOutcome::OutOfRange);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_branch_overwrite_truncates_future() {
        let mut game = GameController::new(3);
        play_all(&mut game, &[0, 1, 2, 3, 5]);
        assert_eq!(game.history().len(), 6);

        assert!(game.jump_to(2));
        assert_eq!(game.history().len(), 6);
        assert!(game.is_x_next());

        assert_eq!(game.play_move(8), MoveOutcome::Played(Mark::X));
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.current_move(), 3);
        assert_eq!(game.current_board().get(2), None);
        assert_eq!(game.current_board().get(8), Some(Mark::X));
    }

    #[test]
    fn test_jump_back_before_win_reopens_play() {
        let mut game = GameController::new(3);
        play_all(&mut game, &[0, 3, 1, 4, 2]);

        game.jump_to(4);
        assert_eq!(game.winner(), None);
        assert_eq!(game.status_label(), "Next player: X");
        assert_eq!(game.history().len(), 6);

        game.jump_to(5);
        assert_eq!(game.winner(), Some(Mark::X));
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut game = GameController::new(3);
        game.play_move(0);

        assert!(!game.jump_to(2));
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_set_grid_size_resets_history() {
        let mut game = GameController::new(3);
        play_all(&mut game, &[0, 1, 2, 3]);

        game.set_grid_size(6);
        assert_eq!(game.grid_size(), 6);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.current_board().len(), 36);
        assert!(game.current_board().is_blank());
    }

    #[test]
    fn test_set_grid_size_clamps() {
        let mut game = GameController::new(3);

        game.set_grid_size(1);
        assert_eq!(game.grid_size(), MIN_GRID_SIZE);

        game.set_grid_size(99);
        assert_eq!(game.grid_size(), MAX_GRID_SIZE);
        assert_eq!(game.current_board().len(), 100);
    }

    #[test]
    fn test_move_labels() {
        let mut game = GameController::new(3);
        play_all(&mut game, &[0, 1]);
        assert_eq!(
            game.move_labels(),
            vec!["Go to game start", "Go to move #1", "Go to move #2"]
        );
    }

    #[test]
    fn test_winning_line_on_large_board() {
        let mut game = GameController::new(4);
        // X fills column 1, O scatters.
        play_all(&mut game, &[1, 0, 5, 2, 9, 3, 13]);
        assert_eq!(game.winner(), Some(Mark::X));
        assert_eq!(game.winning_line(), Some(vec![1, 5, 9, 13]));
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut game = GameController::new(3);
        game.play_move(4);

        let json = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(json["grid_size"], 3);
        assert_eq!(json["history_len"], 2);
        assert_eq!(json["board"][4], "X");
        assert!(json["board"][0].is_null());
        assert_eq!(json["next_player"], "O");
        assert!(json["winner"].is_null());
        assert_eq!(json["status"], "Next player: O");
    }
}
