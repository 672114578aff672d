//! Stopwatch view-model
//!
//! Elapsed time is `accumulated + (now - anchor)` while running and
//! `accumulated` otherwise. Only the monotonic clock is consulted.

use std::time::{Duration, Instant};

use strum::Display;

use crate::{
    core::{cmd::Cmd, msg::stopwatch::StopwatchMsg},
    domain::{
        format::{format_stopwatch, STOPWATCH_ZERO},
        schedule::{TickSource, STOPWATCH_PERIOD},
    },
};

pub const MAX_LAPS: usize = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StopwatchPhase {
    Idle,
    Running,
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwatchState {
    accumulated: Duration,
    running: bool,
    anchor: Option<Instant>,
    /// Most recent first
    laps: Vec<Duration>,
    display: String,
}

impl Default for StopwatchState {
    fn default() -> Self {
        Self {
            accumulated: Duration::ZERO,
            running: false,
            anchor: None,
            laps: Vec::new(),
            display: STOPWATCH_ZERO.to_string(),
        }
    }
}

impl StopwatchState {
    pub fn update(&mut self, msg: StopwatchMsg, now: Instant) -> Vec<Cmd> {
        match msg {
            StopwatchMsg::Start => self.start(now),
            StopwatchMsg::Stop => {
                self.stop(now);
                vec![]
            }
            StopwatchMsg::Reset => {
                self.reset();
                vec![]
            }
            StopwatchMsg::Toggle if self.running => {
                self.stop(now);
                vec![]
            }
            StopwatchMsg::Toggle => self.start(now),
            StopwatchMsg::Lap => {
                self.lap(now);
                vec![]
            }
        }
    }

    pub fn start(&mut self, now: Instant) -> Vec<Cmd> {
        if self.running {
            return vec![];
        }
        self.anchor = Some(now);
        self.running = true;
        self.refresh(now);
        vec![Cmd::schedule(TickSource::Stopwatch, STOPWATCH_PERIOD)]
    }

    pub fn stop(&mut self, now: Instant) {
        if !self.running {
            return;
        }
        self.accumulated = self.elapsed(now);
        self.running = false;
        self.refresh(now);
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.accumulated = Duration::ZERO;
        self.anchor = None;
        self.laps.clear();
        self.display = STOPWATCH_ZERO.to_string();
    }

    pub fn lap(&mut self, now: Instant) {
        if !self.running {
            return;
        }
        self.laps.insert(0, self.elapsed(now));
        self.laps.truncate(MAX_LAPS);
    }

    /// Redraws while running; a tick that finds the stopwatch stopped ends the loop.
    pub fn tick(&mut self, now: Instant) -> Vec<Cmd> {
        if !self.running {
            return vec![];
        }
        self.refresh(now);
        vec![Cmd::schedule(TickSource::Stopwatch, STOPWATCH_PERIOD)]
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        match (self.running, self.anchor) {
            (true, Some(anchor)) => self.accumulated + now.saturating_duration_since(anchor),
            _ => self.accumulated,
        }
    }

    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> StopwatchPhase {
        if self.running {
            StopwatchPhase::Running
        } else if self.accumulated.is_zero() {
            StopwatchPhase::Idle
        } else {
            StopwatchPhase::Stopped
        }
    }

    pub fn laps(&self) -> &[Duration] {
        &self.laps
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    fn refresh(&mut self, now: Instant) {
        self.display = format_stopwatch(self.elapsed(now));
    }
}
