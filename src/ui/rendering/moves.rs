//! Move history list.

use ratatui::{
    Frame,
    style::{Modifier, Style},
    widgets::{List, ListItem, ListState},
};

use crate::ui::{app::App, types::Focus};

impl App {
    pub(in crate::ui) fn draw_moves(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let current = self.game.current_move();

        let items: Vec<ListItem> = self
            .game
            .move_labels()
            .into_iter()
            .enumerate()
            .map(|(index, label)| {
                let marker = if index == current { "▶" } else { " " };
                ListItem::new(format!("{marker} {}. {label}", index + 1))
            })
            .collect();

        let mut list = List::new(items).block(self.panel_block(
            Focus::Moves,
            "Moves | Up/Down: select | Enter: jump".to_string(),
        ));

        if self.focus == Focus::Moves {
            list = list.highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        }

        let mut state = ListState::default().with_selected(Some(self.selected_move));
        f.render_stateful_widget(list, area, &mut state);
    }
}
