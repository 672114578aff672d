//! User-facing notices
//!
//! Notices are fire-and-forget: they queue up in arrival order and the front
//! one is shown until the user acknowledges it.

use std::collections::VecDeque;

use derive_deref::{Deref, DerefMut};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::domain::input::{AlarmTime, InputError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum NoticeKind {
    InvalidDuration,
    InvalidTimeFormat,
    TimerExpired,
    AlarmFired,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn timer_expired() -> Self {
        Self {
            kind: NoticeKind::TimerExpired,
            title: "Timer".to_string(),
            body: "Time is up!".to_string(),
        }
    }

    /// Shows the label, or the alarm time when the label is empty.
    pub fn alarm_fired(time: AlarmTime, label: &str) -> Self {
        let what = if label.is_empty() {
            time.to_string()
        } else {
            label.to_string()
        };
        Self {
            kind: NoticeKind::AlarmFired,
            title: "Alarm".to_string(),
            body: format!("Alarm: {what}"),
        }
    }

    /// Alerts are notices the user did not directly cause.
    pub fn is_alert(&self) -> bool {
        matches!(self.kind, NoticeKind::TimerExpired | NoticeKind::AlarmFired)
    }
}

impl From<InputError> for Notice {
    fn from(err: InputError) -> Self {
        match err {
            InputError::InvalidDuration => Self {
                kind: NoticeKind::InvalidDuration,
                title: "Invalid".to_string(),
                body: err.to_string(),
            },
            InputError::InvalidTimeFormat(_) => Self {
                kind: NoticeKind::InvalidTimeFormat,
                title: "Error".to_string(),
                body: "Invalid time format (HH:MM)".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, DerefMut)]
pub struct Notices(VecDeque<Notice>);

impl Notices {
    pub fn push(&mut self, notice: Notice) {
        log::info!("notice [{}] {}", notice.kind, notice.body);
        self.0.push_back(notice);
    }

    /// The notice currently shown, if any.
    pub fn current(&self) -> Option<&Notice> {
        self.0.front()
    }

    pub fn acknowledge(&mut self) -> Option<Notice> {
        self.0.pop_front()
    }
}
