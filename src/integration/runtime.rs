use std::{collections::VecDeque, mem, sync::Arc};

use crate::{
    core::{
        cmd::Cmd,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::{init, update},
    },
    domain::clock::Clock,
};

/// Owns the application state and runs raw events through translation and
/// update. Side effects come back as commands; nothing here touches the
/// terminal or timers.
pub struct Runtime {
    state: AppState,
    clock: Arc<dyn Clock>,
    raw_msg_queue: VecDeque<RawMsg>,
}

impl Runtime {
    pub fn new(initial_state: AppState, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: initial_state,
            clock,
            raw_msg_queue: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Commands that start the session loops
    pub fn init(&self) -> Vec<Cmd> {
        init(&self.state)
    }

    pub fn send_raw_msg(&mut self, raw: RawMsg) {
        self.raw_msg_queue.push_back(raw);
    }

    pub fn pending(&self) -> usize {
        self.raw_msg_queue.len()
    }

    /// Drains the queue. Each domain message is stamped with a fresh clock
    /// reading. Returns the commands in the order they were raised.
    pub fn run_update_cycle(&mut self) -> Vec<Cmd> {
        let mut commands = Vec::new();

        while let Some(raw) = self.raw_msg_queue.pop_front() {
            if raw.is_frequent() {
                tracing::trace!(?raw, "raw");
            } else {
                log::debug!("raw: {raw:?}");
            }
            for msg in translate_raw_to_domain(raw, &self.state) {
                if msg.is_frequent() {
                    tracing::trace!(?msg, "msg");
                } else {
                    log::debug!("msg: {msg:?}");
                }
                let now = self.clock.now();
                let (state, cmds) = update(msg, mem::take(&mut self.state), now);
                self.state = state;
                commands.extend(cmds);
            }
        }

        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            cmd::TuiCommand,
            state::ui::Tab,
        },
        domain::{clock::ManualClock, schedule::TickSource},
    };
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn manual_clock() -> ManualClock {
        let local = NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .expect("valid datetime");
        ManualClock::new(local)
    }

    #[test]
    fn test_tick_reschedules_itself() {
        let mut runtime = Runtime::new(AppState::default(), Arc::new(manual_clock()));
        runtime.send_raw_msg(RawMsg::Tick(TickSource::Digital));

        let cmds = runtime.run_update_cycle();

        assert_eq!(
            cmds,
            vec![Cmd::schedule(TickSource::Digital, Duration::from_secs(1))]
        );
        assert_eq!(runtime.state().digital.time_text(), "09:00:00");
        assert_eq!(runtime.pending(), 0);
    }

    #[test]
    fn test_messages_apply_in_order() {
        let mut runtime = Runtime::new(AppState::default(), Arc::new(manual_clock()));
        runtime.send_raw_msg(RawMsg::Resize(100, 40));
        runtime.send_raw_msg(RawMsg::Quit);

        let cmds = runtime.run_update_cycle();

        assert_eq!(
            cmds,
            vec![Cmd::Tui(TuiCommand::Resize {
                width: 100,
                height: 40
            })]
        );
        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_unbound_key_changes_nothing() {
        let mut runtime = Runtime::new(AppState::default(), Arc::new(manual_clock()));
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
            KeyCode::Char('z'),
            KeyModifiers::NONE,
        )));

        assert!(runtime.run_update_cycle().is_empty());
        assert_eq!(runtime.state().ui.active_tab, Tab::Analog);
    }
}
