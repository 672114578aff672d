use std::{sync::Arc, time::Duration};

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use tickdeck::{
    core::{
        cmd::TuiCommand,
        state::{countdown::CountdownPhase, ui::Tab, AppState},
    },
    domain::{clock::ManualClock, notice::NoticeKind, schedule::TickSource},
    infrastructure::config::Config,
    integration::runtime::Runtime,
    Cmd, RawMsg,
};

fn press(code: KeyCode) -> RawMsg {
    RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn key(c: char) -> RawMsg {
    press(KeyCode::Char(c))
}

fn setup() -> (ManualClock, Runtime) {
    let clock = ManualClock::new(
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(8, 0, 0))
            .expect("valid datetime"),
    );
    let dir = std::env::temp_dir().join("tickdeck-it-countdown");
    let config = Config::from_dirs(&dir, &dir).expect("default config");
    let runtime = Runtime::new(AppState::new_with_config(config), Arc::new(clock.clone()));
    (clock, runtime)
}

fn send(runtime: &mut Runtime, raw: RawMsg) -> Vec<Cmd> {
    runtime.send_raw_msg(raw);
    runtime.run_update_cycle()
}

fn type_text(runtime: &mut Runtime, text: &str) {
    for c in text.chars() {
        send(runtime, key(c));
    }
}

#[test]
fn test_two_second_timer_expires_once() {
    let (clock, mut runtime) = setup();

    send(&mut runtime, key('4'));
    assert_eq!(runtime.state().ui.active_tab, Tab::Timer);
    send(&mut runtime, key('e'));
    type_text(&mut runtime, "2");
    let cmds = send(&mut runtime, press(KeyCode::Enter));

    assert_eq!(
        cmds,
        vec![Cmd::schedule(TickSource::Countdown, Duration::from_millis(200))]
    );
    assert_eq!(runtime.state().countdown.display(), "00:00:02");
    assert!(!runtime.state().ui.is_editing());

    // Ticks every 200ms until the deadline passes
    let mut ticks = 0;
    loop {
        clock.advance(Duration::from_millis(200));
        let cmds = send(&mut runtime, RawMsg::Tick(TickSource::Countdown));
        ticks += 1;
        if !cmds.iter().any(|c| c.schedules(TickSource::Countdown)) {
            assert!(cmds.contains(&Cmd::Tui(TuiCommand::Bell)));
            break;
        }
        assert!(ticks < 20, "countdown never expired");
    }

    assert_eq!(ticks, 10);
    assert_eq!(runtime.state().countdown.phase(), CountdownPhase::Expired);
    assert_eq!(runtime.state().countdown.display(), "00:00:00");
    assert_eq!(runtime.state().ui.notices.len(), 1);
    assert_eq!(
        runtime.state().ui.notices.current().map(|n| n.kind),
        Some(NoticeKind::TimerExpired)
    );

    // A stray tick after expiry changes nothing
    assert!(send(&mut runtime, RawMsg::Tick(TickSource::Countdown)).is_empty());
    assert_eq!(runtime.state().ui.notices.len(), 1);

    send(&mut runtime, press(KeyCode::Enter));
    assert!(!runtime.state().ui.has_notice());
}

#[test]
fn test_invalid_durations_leave_timer_idle() {
    let (_clock, mut runtime) = setup();
    send(&mut runtime, key('4'));

    for input in ["0", "-5", "abc", "1:2:3:4", "9223372036854775807"] {
        send(&mut runtime, key('e'));
        type_text(&mut runtime, input);
        let cmds = send(&mut runtime, press(KeyCode::Enter));

        assert!(cmds.is_empty(), "{input:?} started a timer");
        assert_eq!(runtime.state().countdown.phase(), CountdownPhase::Idle);
        assert_eq!(
            runtime.state().ui.notices.current().map(|n| n.kind),
            Some(NoticeKind::InvalidDuration),
            "{input:?}"
        );

        // Dismiss, then clear the field for the next attempt
        send(&mut runtime, press(KeyCode::Esc));
        send(&mut runtime, key('e'));
        for _ in 0..input.len() {
            send(&mut runtime, press(KeyCode::Backspace));
        }
        send(&mut runtime, press(KeyCode::Esc));
    }
}

#[test]
fn test_minutes_and_seconds_input() {
    let (_clock, mut runtime) = setup();
    send(&mut runtime, key('4'));
    send(&mut runtime, key('e'));
    type_text(&mut runtime, "1:30");
    send(&mut runtime, press(KeyCode::Enter));

    assert_eq!(runtime.state().countdown.display(), "00:01:30");
    assert_eq!(runtime.state().countdown.phase(), CountdownPhase::Running);
}

#[test]
fn test_stop_then_restart_from_input() {
    let (clock, mut runtime) = setup();
    send(&mut runtime, key('4'));
    send(&mut runtime, key('e'));
    type_text(&mut runtime, "5");
    send(&mut runtime, press(KeyCode::Enter));

    clock.advance(Duration::from_secs(2));
    send(&mut runtime, key('x'));
    assert_eq!(runtime.state().countdown.phase(), CountdownPhase::Idle);
    assert!(send(&mut runtime, RawMsg::Tick(TickSource::Countdown)).is_empty());

    // Starting again uses the field's value, not the remainder
    send(&mut runtime, key('s'));
    assert_eq!(runtime.state().countdown.display(), "00:00:05");
}
