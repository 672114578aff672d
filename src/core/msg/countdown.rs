use serde::{Deserialize, Serialize};

/// Messages specific to CountdownState
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownMsg {
    /// Start counting down `seconds`; non-positive values are rejected
    Start { seconds: i64 },
    Stop,
    Reset,
}
