//! Board grid rendering with cursor and winning-line highlights.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    board::Mark,
    ui::{app::App, types::Focus},
};

impl App {
    pub(in crate::ui) fn draw_board(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let board = self.game.current_board();
        let n = board.size();
        let winning = self.game.winning_line().unwrap_or_default();
        let show_cursor = self.focus == Focus::Board;

        let lines: Vec<Line> = board
            .rows()
            .enumerate()
            .map(|(row, cells)| {
                let spans: Vec<Span> = cells
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| {
                        let index = row * n + col;

                        let (symbol, mut style) = match cell {
                            Some(Mark::X) => ('X', Style::default().fg(Color::Red)),
                            Some(Mark::O) => ('O', Style::default().fg(Color::Blue)),
                            None => ('·', Style::default().fg(Color::DarkGray)),
                        };

                        if winning.contains(&index) {
                            style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
                        }
                        if show_cursor && index == self.cursor {
                            style = style.bg(Color::Cyan).fg(Color::Black);
                        }

                        Span::styled(format!(" {symbol} "), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let title = format!(
            "Board {n}x{n} | Arrows: move | Enter: play | Tab: focus | Ctrl+N: restart | Ctrl+Q: quit"
        );

        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(self.panel_block(Focus::Board, title)),
            area,
        );
    }
}
