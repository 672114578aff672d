use serde::{Deserialize, Serialize};

use crate::core::state::alarms::AlarmId;

/// Messages specific to AlarmsState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlarmMsg {
    /// Validate `time` as HH:MM and append a new alarm
    Add { time: String, label: String },
    RemoveSelected(Vec<AlarmId>),
    CursorUp,
    CursorDown,
    ToggleMark,
}
