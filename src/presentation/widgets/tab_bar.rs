use ratatui::{prelude::*, widgets::Tabs};
use strum::IntoEnumIterator;

use crate::{core::state::ui::Tab, presentation::config::styles::Palette};

#[derive(Clone)]
pub struct TabBarWidget {
    active: Tab,
    palette: Palette,
}

impl TabBarWidget {
    pub fn new(active: Tab, palette: Palette) -> Self {
        Self { active, palette }
    }

    /// Tab titles prefixed with the number key that selects them
    pub fn titles() -> Vec<String> {
        Tab::iter()
            .enumerate()
            .map(|(i, tab)| format!("{} {tab}", i + 1))
            .collect()
    }
}

impl Widget for TabBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Tabs::new(Self::titles())
            .select(self.active.index())
            .style(self.palette.base())
            .highlight_style(self.palette.highlight())
            .divider(Span::styled("|", self.palette.hint()))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::theme::Theme, presentation::config::styles::palette};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_titles_in_tab_order() {
        assert_eq!(
            TabBarWidget::titles(),
            vec![
                "1 Analog Clock",
                "2 Digital Clock",
                "3 Stopwatch",
                "4 Timer",
                "5 Alarms"
            ]
        );
    }

    #[test]
    fn test_active_tab_is_highlighted() {
        let p = palette(Theme::Darkly);
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        TabBarWidget::new(Tab::Analog, p).render(area, &mut buf);

        // Tabs pads each title with one space on the left
        assert_eq!(buf[(1, 0)].symbol(), "1");
        assert_eq!(buf[(1, 0)].bg, p.primary);
    }
}
