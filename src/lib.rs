pub mod args;
pub mod board;
pub mod game;
pub mod headless;
pub mod logging;
pub mod ui;
pub mod win;
