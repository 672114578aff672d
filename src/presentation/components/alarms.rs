//! Alarms tab: add form and list

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use crate::{
    core::state::{
        ui::{Field, UiMode},
        AppState,
    },
    presentation::{config::styles::Palette, widgets::text_field::TextFieldWidget},
};

#[derive(Debug, Clone, Default)]
pub struct AlarmsComponent;

impl AlarmsComponent {
    pub fn new() -> Self {
        Self
    }

    /// Table rows: mark, time, label
    pub fn rows(state: &AppState) -> Vec<[String; 3]> {
        state
            .alarms
            .entries()
            .iter()
            .map(|entry| {
                let mark = if state.alarms.is_marked(entry.id) {
                    "[x]"
                } else {
                    "[ ]"
                };
                [mark.to_string(), entry.time.to_string(), entry.label.clone()]
            })
            .collect()
    }

    pub fn view(&self, state: &AppState, palette: Palette, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(Span::styled(" Alarms ", palette.hint()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(inner);
        let form = Layout::horizontal([Constraint::Length(14), Constraint::Min(10)]).split(rows[0]);

        frame.render_widget(
            TextFieldWidget::new(
                " HH:MM ",
                &state.ui.alarm_time_input,
                state.ui.mode == UiMode::Editing(Field::AlarmTime),
                palette,
            ),
            form[0],
        );
        frame.render_widget(
            TextFieldWidget::new(
                " Label ",
                &state.ui.alarm_label_input,
                state.ui.mode == UiMode::Editing(Field::AlarmLabel),
                palette,
            ),
            form[1],
        );

        let table_rows = Self::rows(state)
            .into_iter()
            .map(|cells| Row::new(cells.into_iter().map(Cell::from)));
        let table = Table::new(
            table_rows,
            [
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(0),
            ],
        )
        .header(Row::new(["", "Time", "Label"]).style(palette.hint()))
        .style(palette.base())
        .row_highlight_style(palette.highlight())
        .highlight_symbol("> ");

        let mut table_state = TableState::default();
        if !state.alarms.entries().is_empty() {
            table_state.select(Some(state.alarms.cursor()));
        }
        frame.render_stateful_widget(table, rows[1], &mut table_state);
    }
}
