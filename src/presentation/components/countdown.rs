//! Timer tab: duration input and remaining time

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    core::state::{
        countdown::CountdownPhase,
        ui::{Field, UiMode},
        AppState,
    },
    presentation::{config::styles::Palette, widgets::text_field::TextFieldWidget},
};

#[derive(Debug, Clone, Default)]
pub struct CountdownComponent;

impl CountdownComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, palette: Palette, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(Span::styled(" Timer ", palette.hint()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        let input_area = Rect {
            width: rows[1].width.min(36),
            ..rows[1]
        };
        let editing = state.ui.mode == UiMode::Editing(Field::TimerDuration);
        frame.render_widget(
            TextFieldWidget::new(
                " Duration: S, M:S or H:M:S ",
                &state.ui.timer_input,
                editing,
                palette,
            ),
            input_area,
        );

        let display_color = match state.countdown.phase() {
            CountdownPhase::Expired => palette.danger,
            CountdownPhase::Running => palette.primary,
            CountdownPhase::Idle => palette.foreground,
        };
        frame.render_widget(
            Paragraph::new(state.countdown.display())
                .style(Style::default().fg(display_color).bold())
                .alignment(Alignment::Center),
            rows[3],
        );

        let hint = if editing {
            "Enter start  Esc cancel"
        } else {
            "e edit  s start  x stop  r reset"
        };
        frame.render_widget(
            Paragraph::new(hint)
                .style(palette.hint())
                .alignment(Alignment::Center),
            rows[4],
        );
    }
}
