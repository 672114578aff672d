use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{
            alarm::AlarmMsg, countdown::CountdownMsg, stopwatch::StopwatchMsg,
            system::SystemMsg, ui::UiMsg, Msg,
        },
        raw_msg::RawMsg,
        state::{ui::Tab, AppState},
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // Timer events
        RawMsg::Tick(source) => vec![Msg::Tick(source)],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // A pending notice is modal
    if state.ui.has_notice() {
        translate_notice_keys(key, state)
    } else if state.ui.is_editing() {
        translate_input_mode_keys(key)
    } else {
        translate_normal_mode_keys(key, state)
    }
}

/// Key bindings while a notice is shown
fn translate_notice_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => vec![Msg::Ui(UiMsg::DismissNotice)],
        _ => match state.config.config.keybindings.action_for(&key) {
            Some(Action::Dismiss) => vec![Msg::Ui(UiMsg::DismissNotice)],
            Some(Action::Quit) => vec![Msg::System(SystemMsg::Quit)],
            _ => vec![],
        },
    }
}

/// Key bindings when a text field has focus
fn translate_input_mode_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter => vec![Msg::Ui(UiMsg::SubmitEdit)],
        KeyCode::Esc => vec![Msg::Ui(UiMsg::CancelEdit)],
        KeyCode::Tab | KeyCode::BackTab => vec![Msg::Ui(UiMsg::FocusNextField)],
        // Everything else is text editing
        _ => vec![Msg::Ui(UiMsg::ProcessInput(key))],
    }
}

/// Key bindings when in normal navigation mode
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match state.config.config.keybindings.action_for(&key) {
        Some(action) => translate_action_to_msg(action, state),
        None => vec![], // No matching keybinding found
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    let tab = state.ui.active_tab;
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::NextTab => vec![Msg::Ui(UiMsg::NextTab)],
        Action::PrevTab => vec![Msg::Ui(UiMsg::PrevTab)],
        Action::ShowAnalog => vec![Msg::Ui(UiMsg::SelectTab(Tab::Analog))],
        Action::ShowDigital => vec![Msg::Ui(UiMsg::SelectTab(Tab::Digital))],
        Action::ShowStopwatch => vec![Msg::Ui(UiMsg::SelectTab(Tab::Stopwatch))],
        Action::ShowTimer => vec![Msg::Ui(UiMsg::SelectTab(Tab::Timer))],
        Action::ShowAlarms => vec![Msg::Ui(UiMsg::SelectTab(Tab::Alarms))],
        Action::NextTheme => vec![Msg::Ui(UiMsg::NextTheme)],
        Action::Dismiss => vec![],
        _ => translate_tab_action(action, tab, state),
    }
}

/// Actions whose meaning depends on the active tab
fn translate_tab_action(action: Action, tab: Tab, state: &AppState) -> Vec<Msg> {
    match (tab, action) {
        (Tab::Stopwatch, Action::Start) => vec![Msg::Stopwatch(StopwatchMsg::Start)],
        (Tab::Stopwatch, Action::Stop) => vec![Msg::Stopwatch(StopwatchMsg::Stop)],
        (Tab::Stopwatch, Action::Reset) => vec![Msg::Stopwatch(StopwatchMsg::Reset)],
        (Tab::Stopwatch, Action::Toggle) => vec![Msg::Stopwatch(StopwatchMsg::Toggle)],
        (Tab::Stopwatch, Action::Lap) => vec![Msg::Stopwatch(StopwatchMsg::Lap)],

        (Tab::Timer, Action::Start) => vec![Msg::Ui(UiMsg::StartTimer)],
        (Tab::Timer, Action::Stop) => vec![Msg::Countdown(CountdownMsg::Stop)],
        (Tab::Timer, Action::Reset) => vec![Msg::Countdown(CountdownMsg::Reset)],
        (Tab::Timer, Action::Toggle) => {
            if state.countdown.is_running() {
                vec![Msg::Countdown(CountdownMsg::Stop)]
            } else {
                vec![Msg::Ui(UiMsg::StartTimer)]
            }
        }
        (Tab::Timer | Tab::Alarms, Action::Edit) => vec![Msg::Ui(UiMsg::BeginEdit)],

        (Tab::Alarms, Action::Up) => vec![Msg::Alarm(AlarmMsg::CursorUp)],
        (Tab::Alarms, Action::Down) => vec![Msg::Alarm(AlarmMsg::CursorDown)],
        (Tab::Alarms, Action::Mark) => vec![Msg::Alarm(AlarmMsg::ToggleMark)],
        (Tab::Alarms, Action::Remove) => {
            let ids = state.alarms.selected_ids();
            if ids.is_empty() {
                vec![]
            } else {
                vec![Msg::Alarm(AlarmMsg::RemoveSelected(ids))]
            }
        }

        _ => vec![],
    }
}
