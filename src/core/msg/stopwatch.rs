use serde::{Deserialize, Serialize};

/// Messages specific to StopwatchState
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopwatchMsg {
    Start,
    Stop,
    Reset,
    /// Start when stopped, stop when running
    Toggle,
    /// Record the current elapsed time as a lap
    Lap,
}
