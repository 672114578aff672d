//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::{
    core::state::{ui::Tab, AppState},
    presentation::{
        config::styles::palette,
        widgets::{
            notice_popup::NoticePopup, status_bar::StatusBarWidget, tab_bar::TabBarWidget,
        },
    },
};

pub mod alarms;
pub mod analog;
pub mod countdown;
pub mod digital;
pub mod stopwatch;

pub use alarms::AlarmsComponent;
pub use analog::AnalogComponent;
pub use countdown::CountdownComponent;
pub use digital::DigitalComponent;
pub use stopwatch::StopwatchComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub analog: AnalogComponent,
    pub digital: DigitalComponent,
    pub stopwatch: StopwatchComponent,
    pub countdown: CountdownComponent,
    pub alarms: AlarmsComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key hints for the footer
    pub fn hint(state: &AppState) -> &'static str {
        if state.ui.has_notice() {
            return "Enter dismiss";
        }
        if state.ui.is_editing() {
            return "Enter submit  Tab next field  Esc cancel";
        }
        match state.ui.active_tab {
            Tab::Analog | Tab::Digital => "Tab/1-5 switch  t theme  q quit",
            Tab::Stopwatch => "s start  x stop  space toggle  l lap  r reset  q quit",
            Tab::Timer => "e edit  s start  x stop  r reset  q quit",
            Tab::Alarms => "e add  j/k move  m mark  d remove  q quit",
        }
    }

    /// Render the whole screen: tabs, active tab, footer, then any notice on top
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let p = palette(state.ui.theme);
        let area = frame.area();

        let layout = Layout::vertical([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Active tab
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        frame.buffer_mut().set_style(area, p.base());
        frame.render_widget(TabBarWidget::new(state.ui.active_tab, p), layout[0]);

        match state.ui.active_tab {
            Tab::Analog => self.analog.view(state, p, frame, layout[1]),
            Tab::Digital => self.digital.view(state, p, frame, layout[1]),
            Tab::Stopwatch => self.stopwatch.view(state, p, frame, layout[1]),
            Tab::Timer => self.countdown.view(state, p, frame, layout[1]),
            Tab::Alarms => self.alarms.view(state, p, frame, layout[1]),
        }

        frame.render_widget(
            StatusBarWidget::new(
                state.system.status_message().cloned(),
                Self::hint(state),
                state.ui.theme,
                p,
            ),
            layout[2],
        );

        if let Some(notice) = state.ui.notices.current() {
            let queued = state.ui.notices.len().saturating_sub(1);
            frame.render_widget(NoticePopup::new(notice, queued, p), area);
        }
    }
}
