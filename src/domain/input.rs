//! Form input parsing
//!
//! Both forms are parse-or-reject: a failed parse never touches state.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Enter a valid duration")]
    InvalidDuration,
    #[error("Invalid time format (HH:MM): {0}")]
    InvalidTimeFormat(String),
}

/// Parses timer input as `S`, `M:S` or `H:M:S` into total seconds.
///
/// Segments are signed so that a non-positive total can be reported as an
/// invalid duration by the countdown itself rather than as a parse failure.
pub fn parse_duration_input(raw: &str) -> Result<i64, InputError> {
    let segments = raw
        .trim()
        .split(':')
        .map(|segment| segment.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| InputError::InvalidDuration)?;

    let (hours, minutes, seconds) = match segments.as_slice() {
        [s] => (0, 0, *s),
        [m, s] => (0, *m, *s),
        [h, m, s] => (*h, *m, *s),
        _ => return Err(InputError::InvalidDuration),
    };

    hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or(InputError::InvalidDuration)
}

/// A 24-hour time of day at minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AlarmTime {
    hour: u8,
    minute: u8,
}

impl AlarmTime {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// True when `local`, truncated to the minute, is this time of day.
    pub fn matches(&self, local: &NaiveDateTime) -> bool {
        local.hour() == u32::from(self.hour) && local.minute() == u32::from(self.minute)
    }
}

impl FromStr for AlarmTime {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|_| InputError::InvalidTimeFormat(s.trim().to_string()))?;
        // Both components come from a validated NaiveTime.
        Ok(Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        })
    }
}

impl fmt::Display for AlarmTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
