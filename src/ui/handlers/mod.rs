//! Handler modules for keyboard input, board play, move history and grid size.

mod game_handler;
mod grid_size_handler;
mod history_handler;
mod input_handler;

pub use game_handler::GameHandler;
pub use grid_size_handler::GridSizeHandler;
pub use history_handler::HistoryHandler;
pub use input_handler::InputHandler;
