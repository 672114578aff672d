use std::time::Duration;

use crate::{
    core::cmd::{Cmd, TuiCommand},
    core::msg::{system::SystemMsg, ui::UiMsg, Msg},
    core::state::{
        ui::{Field, UiMode},
        AppState,
    },
    domain::{
        clock::Now,
        input::parse_duration_input,
        notice::Notice,
        schedule::TickSource,
    },
};

/// Commands that start the loops which run for the whole session
///
/// The analog face, the digital readout and the alarm poller each take their
/// first tick immediately and reschedule themselves from then on.
pub fn init(_state: &AppState) -> Vec<Cmd> {
    [TickSource::Analog, TickSource::Digital, TickSource::Alarms]
        .into_iter()
        .map(|source| Cmd::schedule(source, Duration::ZERO))
        .collect()
}

/// Elm-like update function
/// Returns new state and list of commands from current state, message and
/// the clock reading taken when the message was dispatched
pub fn update(msg: Msg, mut state: AppState, now: Now) -> (AppState, Vec<Cmd>) {
    let queued = state.ui.notices.len();

    let mut commands = match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => state.system.update(system_msg),

        Msg::Tick(source) => tick(&mut state, source, now),

        // Form submission reaches across tabs
        Msg::Ui(UiMsg::SubmitEdit) => submit_edit(&mut state, now),
        Msg::Ui(UiMsg::StartTimer) => start_timer(&mut state, now),

        // The status line follows the theme and is dropped on tab changes
        Msg::Ui(UiMsg::NextTheme) => {
            let mut cmds = state.ui.update(UiMsg::NextTheme);
            let message = format!("Theme: {}", state.ui.theme);
            cmds.extend(state.system.update(SystemMsg::UpdateStatusMessage(message)));
            cmds
        }
        Msg::Ui(ui_msg @ (UiMsg::NextTab | UiMsg::PrevTab | UiMsg::SelectTab(_))) => {
            let mut cmds = state.system.update(SystemMsg::ClearStatusMessage);
            cmds.extend(state.ui.update(ui_msg));
            cmds
        }

        // Other UI messages (delegated to UiState)
        Msg::Ui(ui_msg) => state.ui.update(ui_msg),

        Msg::Stopwatch(stopwatch_msg) => state.stopwatch.update(stopwatch_msg, now.instant),

        Msg::Countdown(countdown_msg) => {
            state
                .countdown
                .update(countdown_msg, now.instant, &mut state.ui.notices)
        }

        Msg::Alarm(alarm_msg) => state.alarms.update(alarm_msg, &mut state.ui.notices),
    };

    let raised_alert = state
        .ui
        .notices
        .iter()
        .skip(queued)
        .any(Notice::is_alert);
    if raised_alert && state.system.bell {
        commands.push(Cmd::Tui(TuiCommand::Bell));
    }

    (state, commands)
}

fn tick(state: &mut AppState, source: TickSource, now: Now) -> Vec<Cmd> {
    match source {
        TickSource::Analog => state.analog.tick(&now.local),
        TickSource::Digital => state.digital.tick(&now.local),
        TickSource::Stopwatch => state.stopwatch.tick(now.instant),
        TickSource::Countdown => state.countdown.tick(now.instant, &mut state.ui.notices),
        TickSource::Alarms => state.alarms.poll(&now.local, &mut state.ui.notices),
    }
}

fn submit_edit(state: &mut AppState, now: Now) -> Vec<Cmd> {
    match state.ui.mode {
        UiMode::Normal => vec![],
        UiMode::Editing(Field::TimerDuration) => {
            state.ui.mode = UiMode::Normal;
            start_timer(state, now)
        }
        UiMode::Editing(Field::AlarmTime | Field::AlarmLabel) => {
            state.ui.mode = UiMode::Normal;
            let added = state.alarms.add(
                &state.ui.alarm_time_input.content,
                &state.ui.alarm_label_input.content,
                &mut state.ui.notices,
            );
            if added.is_some() {
                state.ui.alarm_time_input.clear();
                state.ui.alarm_label_input.clear();
            }
            vec![]
        }
    }
}

fn start_timer(state: &mut AppState, now: Now) -> Vec<Cmd> {
    match parse_duration_input(&state.ui.timer_input.content) {
        Ok(seconds) => state
            .countdown
            .start(seconds, now.instant, &mut state.ui.notices),
        Err(err) => {
            state.ui.notices.push(err.into());
            vec![]
        }
    }
}
