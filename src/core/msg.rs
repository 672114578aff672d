use serde::{Deserialize, Serialize};

pub mod alarm;
pub mod countdown;
pub mod stopwatch;
pub mod system;
pub mod ui;

use crate::domain::schedule::TickSource;
use alarm::AlarmMsg;
use countdown::CountdownMsg;
use stopwatch::StopwatchMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // A periodic loop came due
    Tick(TickSource),

    // Shell operations: tabs, theme, notices, form editing
    Ui(UiMsg),

    // Per-tab operations
    Stopwatch(StopwatchMsg),
    Countdown(CountdownMsg),
    Alarm(AlarmMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Tick(_) => true,
            Msg::Ui(ui) => ui.is_frequent(),
            _ => false,
        }
    }
}
