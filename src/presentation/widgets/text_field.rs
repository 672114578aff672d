use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::{core::state::ui::TextFieldState, presentation::config::styles::Palette};

/// Bordered single-line input; draws a block cursor while focused
pub struct TextFieldWidget<'a> {
    label: &'a str,
    field: &'a TextFieldState,
    focused: bool,
    palette: Palette,
}

impl<'a> TextFieldWidget<'a> {
    pub fn new(label: &'a str, field: &'a TextFieldState, focused: bool, palette: Palette) -> Self {
        Self {
            label,
            field,
            focused,
            palette,
        }
    }

    fn content_line(&self) -> Line<'a> {
        if !self.focused {
            return Line::from(self.field.content.as_str());
        }

        let cursor = self.field.cursor.min(self.field.content.chars().count());
        let split = self
            .field
            .content
            .char_indices()
            .nth(cursor)
            .map_or(self.field.content.len(), |(i, _)| i);
        let (before, rest) = self.field.content.split_at(split);
        let mut chars = rest.chars();
        let under = chars.next().map_or(" ".to_string(), String::from);
        Line::from(vec![
            Span::raw(before.to_string()),
            Span::styled(under, Style::default().reversed()),
            Span::raw(chars.as_str().to_string()),
        ])
    }
}

impl Widget for TextFieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border = if self.focused {
            self.palette.primary
        } else {
            self.palette.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(self.label, self.palette.hint()));
        Paragraph::new(self.content_line())
            .style(self.palette.base())
            .block(block)
            .render(area, buf);
    }
}
