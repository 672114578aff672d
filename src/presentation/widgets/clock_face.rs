use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine},
};

use crate::{
    core::state::analog::{AnalogState, HandKind},
    presentation::config::styles::Palette,
};

/// Dial, 60 tick marks and three hands drawn on a braille canvas
pub struct ClockFaceWidget<'a> {
    analog: &'a AnalogState,
    palette: Palette,
}

impl<'a> ClockFaceWidget<'a> {
    pub fn new(analog: &'a AnalogState, palette: Palette) -> Self {
        Self { analog, palette }
    }

    fn hand_color(&self, kind: HandKind) -> Color {
        match kind {
            HandKind::Hour => self.palette.hour_hand,
            HandKind::Minute => self.palette.minute_hand,
            HandKind::Second => self.palette.second_hand,
        }
    }

    fn paint(&self, ctx: &mut Context<'_>) {
        let face = self.analog.face();
        // Face coordinates grow downwards, the canvas grows upwards
        let flip = |(x, y): (f64, f64)| (x, face.size - y);

        ctx.draw(&Circle {
            x: face.center,
            y: face.center,
            radius: face.radius,
            color: self.palette.dial,
        });

        for mark in face.tick_marks() {
            let (x1, y1) = flip(mark.inner);
            let (x2, y2) = flip(mark.outer);
            let color = if mark.major {
                self.palette.major_tick
            } else {
                self.palette.minor_tick
            };
            ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
        }

        ctx.layer();
        for hand in self.analog.hands() {
            let (x, y) = flip(hand.tip);
            ctx.draw(&CanvasLine::new(
                face.center,
                face.center,
                x,
                y,
                self.hand_color(hand.kind),
            ));
        }
    }
}

impl Widget for ClockFaceWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let size = self.analog.face().size;
        Canvas::default()
            .marker(Marker::Braille)
            .background_color(self.palette.background)
            .x_bounds([0.0, size])
            .y_bounds([0.0, size])
            .paint(|ctx| self.paint(ctx))
            .render(area, buf);
    }
}
