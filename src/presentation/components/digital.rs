//! Digital clock tab

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::{core::state::AppState, presentation::config::styles::Palette};

#[derive(Debug, Clone, Default)]
pub struct DigitalComponent;

impl DigitalComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, palette: Palette, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(Span::styled(" Digital Clock ", palette.hint()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(state.digital.time_text())
                .style(Style::default().fg(palette.primary).bold())
                .alignment(Alignment::Center),
            rows[1],
        );
        frame.render_widget(
            Paragraph::new(state.digital.date_text())
                .style(palette.hint())
                .alignment(Alignment::Center),
            rows[3],
        );
    }
}
