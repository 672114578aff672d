use std::{sync::Arc, time::Duration};

use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use tickdeck::{
    core::{cmd::TuiCommand, state::AppState},
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

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .expect("valid datetime")
}

fn setup(config: Config) -> (ManualClock, Runtime) {
    let clock = ManualClock::new(at(7, 0, 0));
    let runtime = Runtime::new(AppState::new_with_config(config), Arc::new(clock.clone()));
    (clock, runtime)
}

fn default_config() -> Config {
    let dir = std::env::temp_dir().join("tickdeck-it-alarms");
    Config::from_dirs(&dir, &dir).expect("default config")
}

fn send(runtime: &mut Runtime, raw: RawMsg) -> Vec<Cmd> {
    runtime.send_raw_msg(raw);
    runtime.run_update_cycle()
}

fn add_alarm(runtime: &mut Runtime, time: &str, label: &str) {
    send(runtime, key('e'));
    for c in time.chars() {
        send(runtime, key(c));
    }
    send(runtime, press(KeyCode::Tab));
    for c in label.chars() {
        send(runtime, key(c));
    }
    send(runtime, press(KeyCode::Enter));
}

#[test]
fn test_add_poll_and_fire() {
    let (clock, mut runtime) = setup(default_config());
    send(&mut runtime, key('5'));

    add_alarm(&mut runtime, "07:30", "Wake up");
    add_alarm(&mut runtime, "7:31", "");

    let entries = runtime.state().alarms.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].time.to_string(), "07:30");
    assert_eq!(entries[0].label, "Wake up");
    assert_eq!(entries[1].time.to_string(), "07:31");
    assert!(runtime.state().ui.alarm_time_input.content.is_empty());

    // Nothing due yet
    let cmds = send(&mut runtime, RawMsg::Tick(TickSource::Alarms));
    assert_eq!(
        cmds,
        vec![Cmd::schedule(TickSource::Alarms, Duration::from_secs(30))]
    );
    assert!(!runtime.state().ui.has_notice());

    clock.set_local(at(7, 30, 10));
    let cmds = send(&mut runtime, RawMsg::Tick(TickSource::Alarms));
    assert!(cmds.contains(&Cmd::Tui(TuiCommand::Bell)));
    let notice = runtime.state().ui.notices.current().cloned().expect("alarm notice");
    assert_eq!(notice.kind, NoticeKind::AlarmFired);
    assert_eq!(notice.body, "Alarm: Wake up");

    // A second poll inside the same minute fires again
    clock.set_local(at(7, 30, 40));
    send(&mut runtime, RawMsg::Tick(TickSource::Alarms));
    assert_eq!(runtime.state().ui.notices.len(), 2);

    // Unlabelled alarms announce their time
    clock.set_local(at(7, 31, 5));
    send(&mut runtime, RawMsg::Tick(TickSource::Alarms));
    assert_eq!(
        runtime.state().ui.notices.iter().last().map(|n| n.body.as_str()),
        Some("Alarm: 07:31")
    );
}

#[test]
fn test_invalid_time_is_rejected() {
    let (_clock, mut runtime) = setup(default_config());
    send(&mut runtime, key('5'));

    add_alarm(&mut runtime, "25:00", "nope");

    assert!(runtime.state().alarms.entries().is_empty());
    let notice = runtime.state().ui.notices.current().cloned().expect("format notice");
    assert_eq!(notice.kind, NoticeKind::InvalidTimeFormat);
    assert_eq!(notice.body, "Invalid time format (HH:MM)");
    // The typed text stays for correction
    assert_eq!(runtime.state().ui.alarm_time_input.content, "25:00");
}

#[test]
fn test_blank_time_is_ignored() {
    let (_clock, mut runtime) = setup(default_config());
    send(&mut runtime, key('5'));

    add_alarm(&mut runtime, "", "label only");

    assert!(runtime.state().alarms.entries().is_empty());
    assert!(!runtime.state().ui.has_notice());
}

#[test]
fn test_mark_and_remove() {
    let (_clock, mut runtime) = setup(default_config());
    send(&mut runtime, key('5'));
    add_alarm(&mut runtime, "06:00", "a");
    add_alarm(&mut runtime, "06:15", "b");
    add_alarm(&mut runtime, "06:30", "c");

    // Mark the first and the last, then remove both
    send(&mut runtime, key('m'));
    send(&mut runtime, key('j'));
    send(&mut runtime, key('j'));
    send(&mut runtime, key('m'));
    send(&mut runtime, key('d'));

    let labels: Vec<&str> = runtime
        .state()
        .alarms
        .entries()
        .iter()
        .map(|e| e.label.as_str())
        .collect();
    assert_eq!(labels, vec!["b"]);

    // Without marks the cursor row is removed
    send(&mut runtime, key('d'));
    assert!(runtime.state().alarms.entries().is_empty());

    // Removing from an empty list does nothing
    assert!(send(&mut runtime, key('d')).is_empty());
}

#[test]
fn test_poll_interval_from_config() {
    let mut config = default_config();
    config.clock.alarm_poll_secs = 5;
    config.clock.bell = false;
    let (clock, mut runtime) = setup(config);
    send(&mut runtime, key('5'));
    add_alarm(&mut runtime, "07:00", "");

    clock.set_local(at(7, 0, 1));
    let cmds = send(&mut runtime, RawMsg::Tick(TickSource::Alarms));

    assert_eq!(
        cmds,
        vec![Cmd::schedule(TickSource::Alarms, Duration::from_secs(5))]
    );
    assert!(runtime.state().ui.has_notice());
}
