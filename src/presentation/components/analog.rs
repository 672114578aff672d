//! Analog clock tab

use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

use crate::{
    core::state::AppState,
    presentation::{config::styles::Palette, widgets::clock_face::ClockFaceWidget},
};

#[derive(Debug, Clone, Default)]
pub struct AnalogComponent;

impl AnalogComponent {
    pub fn new() -> Self {
        Self
    }

    /// The largest area that looks square on screen. Terminal cells are
    /// roughly twice as tall as wide.
    pub fn square(area: Rect) -> Rect {
        let width = area.width.min(area.height.saturating_mul(2));
        let height = (width / 2).min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }

    pub fn view(&self, state: &AppState, palette: Palette, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(Span::styled(" Analog Clock ", palette.hint()));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(ClockFaceWidget::new(&state.analog, palette), Self::square(inner));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_square_keeps_aspect() {
        assert_eq!(
            AnalogComponent::square(Rect::new(0, 0, 100, 20)),
            Rect::new(30, 0, 40, 20)
        );
        assert_eq!(
            AnalogComponent::square(Rect::new(0, 0, 20, 30)),
            Rect::new(0, 10, 20, 10)
        );
    }
}
