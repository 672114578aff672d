use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::{domain::theme::Theme, presentation::config::styles::Palette};

/// One-line footer: status message (or key hints) on the left, theme on the right
pub struct StatusBarWidget {
    message: Option<String>,
    hint: &'static str,
    theme: Theme,
    palette: Palette,
}

impl StatusBarWidget {
    pub fn new(
        message: Option<String>,
        hint: &'static str,
        theme: Theme,
        palette: Palette,
    ) -> Self {
        Self {
            message,
            hint,
            theme,
            palette,
        }
    }
}

impl Widget for StatusBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let theme_label = format!(" theme: {} ", self.theme);
        let layout = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(u16::try_from(theme_label.width()).unwrap_or(u16::MAX)),
        ])
        .split(area);

        let left = match self.message {
            Some(message) => Span::styled(message, Style::default().fg(self.palette.warning)),
            None => Span::styled(self.hint, self.palette.hint()),
        };
        Paragraph::new(left)
            .style(self.palette.base())
            .render(layout[0], buf);
        Paragraph::new(Span::styled(theme_label, self.palette.hint().italic()))
            .style(self.palette.base())
            .render(layout[1], buf);
    }
}
