//! Stopwatch tab: elapsed time and laps

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::{
    core::state::{stopwatch::StopwatchPhase, AppState},
    domain::format::format_stopwatch,
    presentation::config::styles::Palette,
};

#[derive(Debug, Clone, Default)]
pub struct StopwatchComponent;

impl StopwatchComponent {
    pub fn new() -> Self {
        Self
    }

    /// Lap lines, most recent first, numbered from the first lap taken
    pub fn lap_lines(state: &AppState) -> Vec<String> {
        let laps = state.stopwatch.laps();
        laps.iter()
            .enumerate()
            .map(|(i, lap)| format!("Lap {:>2}  {}", laps.len() - i, format_stopwatch(*lap)))
            .collect()
    }

    pub fn view(&self, state: &AppState, palette: Palette, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(Span::styled(" Stopwatch ", palette.hint()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        let (phase, color) = match state.stopwatch.phase() {
            StopwatchPhase::Idle => ("ready", palette.muted),
            StopwatchPhase::Running => ("running", palette.success),
            StopwatchPhase::Stopped => ("stopped", palette.warning),
        };

        frame.render_widget(
            Paragraph::new(state.stopwatch.display())
                .style(Style::default().fg(palette.primary).bold())
                .alignment(Alignment::Center),
            rows[1],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(phase, Style::default().fg(color)))
                .alignment(Alignment::Center),
            rows[2],
        );

        let laps: Vec<ListItem> = Self::lap_lines(state)
            .into_iter()
            .map(ListItem::new)
            .collect();
        frame.render_widget(
            List::new(laps).style(palette.base()),
            centered_column(rows[4], 24),
        );
    }
}

fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}
