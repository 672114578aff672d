//! Time sources
//!
//! Every state transition that depends on time receives a [`Now`] captured
//! once per dispatched message, so transitions stay deterministic under test.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDateTime, TimeDelta};

/// A single reading of both clocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Now {
    /// Monotonic instant, used for every elapsed/remaining computation.
    pub instant: Instant,
    /// Local wall-clock time, used for clock faces and alarms.
    pub local: NaiveDateTime,
}

impl Now {
    pub fn new(instant: Instant, local: NaiveDateTime) -> Self {
        Self { instant, local }
    }
}

pub trait Clock: Send + Sync {
    fn now(&self) -> Now;
}

/// Reads the host's real clocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Now {
        Now {
            instant: Instant::now(),
            local: Local::now().naive_local(),
        }
    }
}

/// A clock that only moves when told to.
///
/// Cloning shares the underlying reading, so a test can keep a handle while
/// the runner owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    inner: Arc<Mutex<Now>>,
}

impl ManualClock {
    pub fn new(local: NaiveDateTime) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Now::new(Instant::now(), local))),
        }
    }

    /// Moves both clocks forward by `by`.
    pub fn advance(&self, by: Duration) {
        if let Ok(mut now) = self.inner.lock() {
            now.instant += by;
            if let Ok(delta) = TimeDelta::from_std(by) {
                now.local += delta;
            }
        }
    }

    /// Jumps the wall clock only, the way an NTP sync or DST change would.
    pub fn set_local(&self, local: NaiveDateTime) {
        if let Ok(mut now) = self.inner.lock() {
            now.local = local;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Now {
        match self.inner.lock() {
            Ok(now) => *now,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
