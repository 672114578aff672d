use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    domain::notice::Notice,
    presentation::config::styles::Palette,
};

/// Modal box for the notice at the head of the queue
pub struct NoticePopup<'a> {
    notice: &'a Notice,
    /// Notices waiting behind this one
    queued: usize,
    palette: Palette,
}

impl<'a> NoticePopup<'a> {
    pub fn new(notice: &'a Notice, queued: usize, palette: Palette) -> Self {
        Self {
            notice,
            queued,
            palette,
        }
    }

    /// A rectangle of at most `width` x `height` centered in `area`
    pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

impl Widget for NoticePopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let accent = if self.notice.is_alert() {
            self.palette.info
        } else {
            self.palette.danger
        };
        let popup = Self::centered(area, 44, 7);

        let footer = if self.queued > 0 {
            format!(" Enter: OK ({} more) ", self.queued)
        } else {
            " Enter: OK ".to_string()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent))
            .title(Span::styled(
                format!(" {} ", self.notice.title),
                Style::default().fg(accent).bold(),
            ))
            .title_bottom(Line::from(footer).right_aligned())
            .style(self.palette.base());

        Clear.render(popup, buf);
        Paragraph::new(self.notice.body.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(popup, buf);
    }
}
