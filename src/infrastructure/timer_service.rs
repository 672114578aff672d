use std::{collections::HashMap, future, time::Duration};

use tokio::time::{self, Instant};

use crate::domain::schedule::TickSource;

/// Stand-in deadline for delays the clock cannot represent
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// Holds at most one pending tick per source
///
/// Arming a source that is already pending replaces its deadline, so a loop
/// can never run twice in parallel.
#[derive(Debug, Default)]
pub struct TimerService {
    deadlines: HashMap<TickSource, Instant>,
}

impl TimerService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, source: TickSource, after: Duration) {
        let now = Instant::now();
        let deadline = now.checked_add(after).unwrap_or(now + FAR_FUTURE);
        if self.deadlines.insert(source, deadline).is_some() {
            log::debug!("re-armed {source} tick");
        }
    }

    pub fn cancel(&mut self, source: TickSource) -> bool {
        self.deadlines.remove(&source).is_some()
    }

    pub fn is_armed(&self, source: TickSource) -> bool {
        self.deadlines.contains_key(&source)
    }

    pub fn pending(&self) -> usize {
        self.deadlines.len()
    }

    /// Earliest deadline; ties go to the source declared first
    pub fn next_deadline(&self) -> Option<(TickSource, Instant)> {
        self.deadlines
            .iter()
            .map(|(source, deadline)| (*source, *deadline))
            .min_by_key(|(source, deadline)| (*deadline, *source))
    }

    /// Waits for the earliest pending tick and disarms it.
    /// Never resolves while nothing is armed. Dropping the future before it
    /// resolves leaves the deadline in place.
    pub async fn next_due(&mut self) -> TickSource {
        match self.next_deadline() {
            Some((source, deadline)) => {
                time::sleep_until(deadline).await;
                self.deadlines.remove(&source);
                source
            }
            None => future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_earliest_source_fires_first() {
        let mut timers = TimerService::new();
        timers.arm(TickSource::Digital, Duration::from_millis(40));
        timers.arm(TickSource::Stopwatch, Duration::from_millis(5));

        assert_eq!(timers.next_due().await, TickSource::Stopwatch);
        assert!(!timers.is_armed(TickSource::Stopwatch));
        assert_eq!(timers.next_due().await, TickSource::Digital);
        assert_eq!(timers.pending(), 0);
    }

    #[tokio::test]
    async fn test_rearm_replaces_pending_tick() {
        let mut timers = TimerService::new();
        timers.arm(TickSource::Countdown, Duration::from_secs(60));
        timers.arm(TickSource::Countdown, Duration::ZERO);

        assert_eq!(timers.pending(), 1);
        assert_eq!(timers.next_due().await, TickSource::Countdown);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_cancel() {
        let mut timers = TimerService::new();
        timers.arm(TickSource::Alarms, Duration::from_secs(30));
        assert!(timers.cancel(TickSource::Alarms));
        assert!(!timers.cancel(TickSource::Alarms));
        assert_eq!(timers.next_deadline(), None);
    }

    #[tokio::test]
    async fn test_unrepresentable_delay_stays_pending() {
        let mut timers = TimerService::new();
        timers.arm(TickSource::Alarms, Duration::from_secs(u64::MAX));
        timers.arm(TickSource::Digital, Duration::from_millis(5));

        assert!(timers.is_armed(TickSource::Alarms));
        assert_eq!(timers.next_due().await, TickSource::Digital);
        let fired = time::timeout(Duration::from_millis(20), timers.next_due()).await;
        assert!(fired.is_err());
        assert!(timers.is_armed(TickSource::Alarms));
    }

    #[tokio::test]
    async fn test_idle_service_never_fires() {
        let mut timers = TimerService::new();
        let fired = time::timeout(Duration::from_millis(20), timers.next_due()).await;
        assert!(fired.is_err());
    }
}
