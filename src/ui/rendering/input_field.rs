//! Grid size input rendering with validation status.

use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::ui::{
    app::App,
    types::{Focus, InputStatus},
};

impl App {
    pub(in crate::ui) fn draw_grid_size_input(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let status = self.size_input_status();

        let (border_color, subtitle) = match status {
            InputStatus::Incomplete => (Color::Gray, ""),
            InputStatus::Valid(_) => (Color::Green, ""),
            InputStatus::Invalid(msg) => (Color::Red, msg),
        };

        let focused = self.focus == Focus::GridSize;
        let text = if focused {
            format!("{}▌", self.size_input)
        } else {
            self.size_input.clone()
        };

        let mut block = self.panel_block(
            Focus::GridSize,
            format!("Grid Size (3-10) {subtitle} | Up/Down: step | Enter: apply"),
        );
        if focused {
            block = block.border_style(Style::default().fg(border_color));
        }

        f.render_widget(Paragraph::new(text).block(block), area);
    }
}
