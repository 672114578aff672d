use crate::{domain::schedule::alarm_poll_period, infrastructure::config::Config};

pub mod alarms;
pub mod analog;
pub mod countdown;
pub mod digital;
pub mod stopwatch;
pub mod system;
pub mod ui;

use alarms::AlarmsState;
use analog::AnalogState;
use countdown::CountdownState;
use digital::DigitalState;
use stopwatch::StopwatchState;
use system::SystemState;
use ui::UiState;

/// Unified application state
///
/// Every tab owns its own view-model; none of them reads another's.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub analog: AnalogState,
    pub digital: DigitalState,
    pub stopwatch: StopwatchState,
    pub countdown: CountdownState,
    pub alarms: AlarmsState,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState from configuration
    pub fn new_with_config(config: Config) -> Self {
        let clock = &config.clock;
        Self {
            analog: AnalogState::new(clock.fps),
            alarms: AlarmsState::new(alarm_poll_period(clock.alarm_poll_secs)),
            ui: UiState::new(config.theme),
            system: SystemState {
                bell: clock.bell,
                ..Default::default()
            },
            config: ConfigState { config },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{schedule::MAX_ALARM_POLL, theme::Theme},
        infrastructure::config::ClockConfig,
    };
    use std::time::Duration;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_with_config_applies_clock_settings() {
        let config = Config {
            theme: Theme::Cyborg,
            clock: ClockConfig {
                fps: 24,
                alarm_poll_secs: 10,
                bell: false,
            },
            ..Default::default()
        };

        let state = AppState::new_with_config(config);

        assert_eq!(state.analog.fps(), 24);
        assert_eq!(state.alarms.poll_interval(), Duration::from_secs(10));
        assert_eq!(state.ui.theme, Theme::Cyborg);
        assert!(!state.system.bell);
    }

    #[test]
    fn test_zero_poll_interval_is_clamped() {
        let config = Config {
            clock: ClockConfig {
                alarm_poll_secs: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let state = AppState::new_with_config(config);
        assert_eq!(state.alarms.poll_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_huge_poll_interval_is_clamped() {
        let config = Config {
            clock: ClockConfig {
                alarm_poll_secs: u64::MAX,
                ..Default::default()
            },
            ..Default::default()
        };
        let state = AppState::new_with_config(config);
        assert_eq!(state.alarms.poll_interval(), MAX_ALARM_POLL);
    }
}
