use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{
    board::{MAX_GRID_SIZE, MIN_GRID_SIZE},
    game::GameController,
};

use super::types::{Focus, InputStatus, LogBuffer};

/// Main application state container.
pub struct App {
    pub(in crate::ui) game: GameController,
    pub(in crate::ui) focus: Focus,
    pub(in crate::ui) cursor: usize,
    pub(in crate::ui) selected_move: usize,
    pub(in crate::ui) size_input: String,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(grid_size: usize, logs: LogBuffer) -> Self {
        let game = GameController::new(grid_size);
        let size_input = game.grid_size().to_string();

        Self {
            game,
            focus: Focus::Board,
            cursor: 0,
            selected_move: 0,
            size_input,
            logs,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log(format!(
            "New {n}x{n} game. {}",
            self.game.status_label(),
            n = self.game.grid_size()
        ));

        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && super::handlers::InputHandler::new(self).handle_key(key)
            {
                return Ok(());
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }

    /// Validate the grid size being typed.
    pub(in crate::ui) fn size_input_status(&self) -> InputStatus {
        let text = self.size_input.trim();

        if text.is_empty() {
            return InputStatus::Incomplete;
        }

        match text.parse::<usize>() {
            Err(_) => InputStatus::Invalid("digits only"),
            Ok(size) if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) => {
                InputStatus::Invalid("size must be 3-10")
            }
            Ok(size) => InputStatus::Valid(size),
        }
    }

    /// Row and column of the board cursor.
    pub(in crate::ui) fn cursor_position(&self) -> (usize, usize) {
        let n = self.game.grid_size();
        (self.cursor / n, self.cursor % n)
    }
}
