//! Countdown view-model
//!
//! `remaining = deadline - now` on the monotonic clock. Expiry happens on the
//! first tick that finds `remaining <= 0` and notifies exactly once.

use std::time::{Duration, Instant};

use strum::Display;

use crate::{
    core::{cmd::Cmd, msg::countdown::CountdownMsg},
    domain::{
        format::{format_countdown, COUNTDOWN_ZERO},
        input::InputError,
        notice::{Notice, Notices},
        schedule::{TickSource, COUNTDOWN_PERIOD},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CountdownPhase {
    Idle,
    Running,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownState {
    deadline: Option<Instant>,
    running: bool,
    expired: bool,
    display: String,
}

impl Default for CountdownState {
    fn default() -> Self {
        Self {
            deadline: None,
            running: false,
            expired: false,
            display: COUNTDOWN_ZERO.to_string(),
        }
    }
}

impl CountdownState {
    pub fn update(&mut self, msg: CountdownMsg, now: Instant, notices: &mut Notices) -> Vec<Cmd> {
        match msg {
            CountdownMsg::Start { seconds } => self.start(seconds, now, notices),
            CountdownMsg::Stop => {
                self.stop();
                vec![]
            }
            CountdownMsg::Reset => {
                self.reset();
                vec![]
            }
        }
    }

    /// Rejects non-positive durations, and deadlines the monotonic clock
    /// cannot represent, without touching any state.
    pub fn start(&mut self, seconds: i64, now: Instant, notices: &mut Notices) -> Vec<Cmd> {
        let Some((duration, deadline)) = u64::try_from(seconds)
            .ok()
            .filter(|s| *s > 0)
            .map(Duration::from_secs)
            .and_then(|duration| now.checked_add(duration).map(|deadline| (duration, deadline)))
        else {
            notices.push(InputError::InvalidDuration.into());
            return vec![];
        };

        self.deadline = Some(deadline);
        self.running = true;
        self.expired = false;
        self.display = format_countdown(duration);
        vec![Cmd::schedule(TickSource::Countdown, COUNTDOWN_PERIOD)]
    }

    /// The deadline is kept but ignored until the next start.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.expired = false;
        self.display = COUNTDOWN_ZERO.to_string();
    }

    pub fn tick(&mut self, now: Instant, notices: &mut Notices) -> Vec<Cmd> {
        if !self.running {
            return vec![];
        }

        match self.remaining(now) {
            Some(remaining) => {
                self.display = format_countdown(remaining);
                vec![Cmd::schedule(TickSource::Countdown, COUNTDOWN_PERIOD)]
            }
            None => {
                self.display = COUNTDOWN_ZERO.to_string();
                self.running = false;
                self.expired = true;
                notices.push(Notice::timer_expired());
                vec![]
            }
        }
    }

    /// Time left before the deadline, `None` once it has passed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .and_then(|deadline| deadline.checked_duration_since(now))
            .filter(|remaining| !remaining.is_zero())
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> CountdownPhase {
        if self.running {
            CountdownPhase::Running
        } else if self.expired {
            CountdownPhase::Expired
        } else {
            CountdownPhase::Idle
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}
