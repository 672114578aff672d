//! Alarm list view-model
//!
//! The list keeps insertion order and allows duplicates. The poller compares
//! every entry against the current minute; an alarm refires on each poll that
//! lands inside its minute, and a poll cadence that skips the minute misses it.

use std::collections::BTreeSet;
use std::time::Duration;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
    core::{cmd::Cmd, msg::alarm::AlarmMsg},
    domain::{
        input::AlarmTime,
        notice::{Notice, Notices},
        schedule::{TickSource, DEFAULT_ALARM_POLL},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AlarmId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmEntry {
    pub id: AlarmId,
    pub time: AlarmTime,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmsState {
    entries: Vec<AlarmEntry>,
    next_id: u64,
    cursor: usize,
    marked: BTreeSet<AlarmId>,
    poll_interval: Duration,
}

impl Default for AlarmsState {
    fn default() -> Self {
        Self::new(DEFAULT_ALARM_POLL)
    }
}

impl AlarmsState {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            cursor: 0,
            marked: BTreeSet::new(),
            poll_interval,
        }
    }

    pub fn update(&mut self, msg: AlarmMsg, notices: &mut Notices) -> Vec<Cmd> {
        match msg {
            AlarmMsg::Add { time, label } => {
                self.add(&time, &label, notices);
            }
            AlarmMsg::RemoveSelected(ids) => self.remove_selected(&ids),
            AlarmMsg::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            AlarmMsg::CursorDown => {
                if self.cursor + 1 < self.entries.len() {
                    self.cursor += 1;
                }
            }
            AlarmMsg::ToggleMark => {
                if let Some(id) = self.entries.get(self.cursor).map(|e| e.id) {
                    if !self.marked.remove(&id) {
                        self.marked.insert(id);
                    }
                }
            }
        }
        vec![]
    }

    /// Validates and appends an alarm.
    ///
    /// Blank time text is ignored; malformed time text queues a format notice.
    /// Either way nothing is added and `None` is returned.
    pub fn add(&mut self, time: &str, label: &str, notices: &mut Notices) -> Option<AlarmId> {
        let time = time.trim();
        if time.is_empty() {
            return None;
        }
        match time.parse::<AlarmTime>() {
            Ok(time) => {
                let id = AlarmId(self.next_id);
                self.next_id += 1;
                self.entries.push(AlarmEntry {
                    id,
                    time,
                    label: label.trim().to_string(),
                });
                log::info!("alarm {} added at {time}", id.0);
                Some(id)
            }
            Err(err) => {
                notices.push(err.into());
                None
            }
        }
    }

    pub fn remove_selected(&mut self, ids: &[AlarmId]) {
        self.entries.retain(|entry| !ids.contains(&entry.id));
        self.marked.retain(|id| !ids.contains(id));
        self.cursor = self.cursor.min(self.entries.len().saturating_sub(1));
    }

    /// Marked entries, or the entry under the cursor when nothing is marked.
    pub fn selected_ids(&self) -> Vec<AlarmId> {
        if self.marked.is_empty() {
            self.entries
                .get(self.cursor)
                .map(|entry| vec![entry.id])
                .unwrap_or_default()
        } else {
            self.entries
                .iter()
                .filter(|entry| self.marked.contains(&entry.id))
                .map(|entry| entry.id)
                .collect()
        }
    }

    /// One poll: a notice per matching alarm, then the next poll.
    pub fn poll(&mut self, local: &NaiveDateTime, notices: &mut Notices) -> Vec<Cmd> {
        for entry in self.entries.iter().filter(|e| e.time.matches(local)) {
            notices.push(Notice::alarm_fired(entry.time, &entry.label));
        }
        vec![Cmd::schedule(TickSource::Alarms, self.poll_interval)]
    }

    pub fn entries(&self) -> &[AlarmEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_marked(&self, id: AlarmId) -> bool {
        self.marked.contains(&id)
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}
