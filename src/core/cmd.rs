use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::schedule::TickSource;

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
    /// Ring the terminal bell
    Bell,
}

/// Elm-like command definitions
///
/// Represents side effects the pure update function asks the runner to
/// perform. Rescheduling a loop is a side effect too: a tick handler that
/// returns no `Schedule` for its own source ends that loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Arm (or re-arm) the single pending tick of `source`
    Schedule { source: TickSource, after: Duration },

    // UI-related commands
    Tui(TuiCommand),

    // Logging related
    LogError { message: String },
    LogInfo { message: String },
}

impl Cmd {
    pub fn schedule(source: TickSource, after: Duration) -> Cmd {
        Cmd::Schedule { source, after }
    }

    /// Whether this command schedules `source`
    pub fn schedules(&self, source: TickSource) -> bool {
        matches!(self, Cmd::Schedule { source: s, .. } if *s == source)
    }

    /// Get command name (for debugging)
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::Schedule { .. } => "Schedule",
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui::Resize",
            Cmd::Tui(TuiCommand::Bell) => "Tui::Bell",
            Cmd::LogError { .. } => "LogError",
            Cmd::LogInfo { .. } => "LogInfo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_schedules_matches_source() {
        let cmd = Cmd::schedule(TickSource::Stopwatch, Duration::from_millis(20));
        assert!(cmd.schedules(TickSource::Stopwatch));
        assert!(!cmd.schedules(TickSource::Countdown));
        assert!(!Cmd::Tui(TuiCommand::Bell).schedules(TickSource::Stopwatch));
    }

    #[test]
    fn test_command_names() {
        assert_eq!(
            Cmd::schedule(TickSource::Alarms, Duration::ZERO).name(),
            "Schedule"
        );
        assert_eq!(Cmd::Tui(TuiCommand::Bell).name(), "Tui::Bell");
        assert_eq!(
            Cmd::LogInfo {
                message: "x".into()
            }
            .name(),
            "LogInfo"
        );
    }

    #[test]
    fn test_cmd_serialization() -> Result<(), serde_json::Error> {
        let cmd = Cmd::schedule(TickSource::Countdown, Duration::from_millis(200));
        let json = serde_json::to_string(&cmd)?;
        let back: Cmd = serde_json::from_str(&json)?;
        assert_eq!(back, cmd);
        Ok(())
    }
}
