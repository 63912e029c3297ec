mod board;
mod input_field;
mod logs;
mod moves;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders},
};

use crate::ui::{app::App, types::Focus};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let main_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(f.area());

        // One text row per board row plus the borders.
        let board_height = self.game.grid_size() as u16 + 2;

        let left_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(board_height),
                Constraint::Length(3),
            ])
            .split(main_layout[0]);

        let right_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(8)])
            .split(main_layout[1]);

        self.draw_status(f, left_layout[0]);
        self.draw_board(f, left_layout[1]);
        self.draw_grid_size_input(f, left_layout[2]);
        self.draw_moves(f, right_layout[0]);
        self.draw_logs(f, right_layout[1]);
    }

    /// Bordered block, highlighted when `panel` has focus.
    pub(in crate::ui) fn panel_block(&self, panel: Focus, title: String) -> Block<'static> {
        let border_color = if self.focus == panel {
            Color::Cyan
        } else {
            Color::Gray
        };

        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title)
    }
}
