//! Loop identities and cadences
//!
//! Each component owns exactly one periodic loop. A loop keeps running only
//! as long as its tick handler asks to be scheduled again.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

pub const DIGITAL_PERIOD: Duration = Duration::from_millis(1000);
pub const STOPWATCH_PERIOD: Duration = Duration::from_millis(20);
pub const COUNTDOWN_PERIOD: Duration = Duration::from_millis(200);
pub const DEFAULT_ALARM_POLL: Duration = Duration::from_secs(30);
pub const DEFAULT_FPS: u32 = 60;
pub const MAX_FPS: u32 = 1000;
/// Longest alarm poll; anything slower would miss every minute anyway.
pub const MAX_ALARM_POLL: Duration = Duration::from_secs(24 * 60 * 60);
pub const DEFAULT_FRAME_RATE: f64 = 30.0;
pub const MAX_FRAME_RATE: f64 = 1000.0;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum TickSource {
    Analog,
    Digital,
    Stopwatch,
    Countdown,
    Alarms,
}

/// Period of the analog face loop for a given frame rate.
pub fn analog_period(fps: u32) -> Duration {
    Duration::from_millis(1000 / u64::from(fps.clamp(1, MAX_FPS)))
}

/// Alarm poll interval from configured seconds, kept within 1 s and a day.
pub fn alarm_poll_period(secs: u64) -> Duration {
    Duration::from_secs(secs).clamp(Duration::from_secs(1), MAX_ALARM_POLL)
}

/// Period between terminal render events. Rates that are not a number fall
/// back to the default.
pub fn render_period(frame_rate: f64) -> Duration {
    let rate = if frame_rate.is_nan() {
        DEFAULT_FRAME_RATE
    } else {
        frame_rate.clamp(1.0, MAX_FRAME_RATE)
    };
    Duration::from_secs_f64(1.0 / rate)
}
