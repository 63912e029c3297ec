use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{game::GameStatus, ui::app::App};

impl App {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let status = self.game.status();

        let style = match status {
            GameStatus::Won(_) => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            GameStatus::InProgress { .. } => Style::default().fg(Color::White),
        };

        let title = format!(
            "Status | move {} of {}",
            self.game.current_move(),
            self.game.history().len() - 1
        );

        f.render_widget(
            Paragraph::new(status.label())
                .style(style)
                .block(Block::default().borders(Borders::ALL).title(title)),
            area,
        );
    }
}
