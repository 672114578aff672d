use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

/// User-invocable actions; what an action does depends on the active tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Action {
    Quit,
    Suspend,
    NextTab,
    PrevTab,
    ShowAnalog,
    ShowDigital,
    ShowStopwatch,
    ShowTimer,
    ShowAlarms,
    NextTheme,
    Start,
    Stop,
    Reset,
    Toggle,
    Lap,
    Edit,
    Remove,
    Mark,
    Up,
    Down,
    Dismiss,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<KeyEvent, Action>);

impl KeyBindings {
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.0.get(&normalize(key)).copied()
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_event(&key_str)
                    .map(|key| (key, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

/// Drops modifier bits terminals report inconsistently, so a binding and an
/// incoming event compare equal.
pub fn normalize(key: &KeyEvent) -> KeyEvent {
    let mut modifiers = key.modifiers;
    match key.code {
        KeyCode::BackTab => modifiers.remove(KeyModifiers::SHIFT),
        KeyCode::Char(c) if !c.is_ascii_lowercase() => modifiers.remove(KeyModifiers::SHIFT),
        _ => {}
    }
    KeyEvent::new(key.code, modifiers)
}

/// Parses `<ctrl-c>`, `<tab>`, `<q>` style key strings.
pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let inner = raw
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(raw);
    if inner.is_empty() {
        return Err(format!("Unable to parse `{raw}`"));
    }

    let lowered = inner.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&lowered);
    parse_key_code_with_modifiers(remaining, modifiers).map(|key| normalize(&key))
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            }
            rest if rest.starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            }
            rest if rest.starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            }
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let code = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        f if f.len() > 1 && f.starts_with('f') => f[1..]
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=12).contains(n))
            .map(KeyCode::F)
            .ok_or_else(|| format!("Unable to parse `{raw}`"))?,
        c if c.chars().count() == 1 => {
            let mut c = c.chars().next().unwrap_or_default();
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
                modifiers.remove(KeyModifiers::SHIFT);
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse `{raw}`")),
    };
    Ok(KeyEvent::new(code, modifiers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("<q>", KeyCode::Char('q'), KeyModifiers::NONE)]
    #[case("<ctrl-c>", KeyCode::Char('c'), KeyModifiers::CONTROL)]
    #[case("<Ctrl-Alt-x>", KeyCode::Char('x'), KeyModifiers::CONTROL | KeyModifiers::ALT)]
    #[case("<shift-l>", KeyCode::Char('L'), KeyModifiers::NONE)]
    #[case("<tab>", KeyCode::Tab, KeyModifiers::NONE)]
    #[case("<backtab>", KeyCode::BackTab, KeyModifiers::NONE)]
    #[case("<space>", KeyCode::Char(' '), KeyModifiers::NONE)]
    #[case("<f5>", KeyCode::F(5), KeyModifiers::NONE)]
    #[case("enter", KeyCode::Enter, KeyModifiers::NONE)]
    fn test_parse_key_event(
        #[case] raw: &str,
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
    ) {
        assert_eq!(parse_key_event(raw), Ok(KeyEvent::new(code, modifiers)));
    }

    #[rstest]
    #[case("<>")]
    #[case("<f13>")]
    #[case("<nope>")]
    fn test_parse_key_event_rejects(#[case] raw: &str) {
        assert!(parse_key_event(raw).is_err());
    }

    #[test]
    fn test_normalize_terminal_quirks() {
        let backtab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(
            normalize(&backtab),
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE)
        );

        let upper = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(
            normalize(&upper),
            KeyEvent::new(KeyCode::Char('A'), KeyModifiers::NONE)
        );
    }

    #[test]
    fn test_deserialize_keybindings() -> Result<(), json5::Error> {
        let bindings: KeyBindings = json5::from_str(
            r#"{
                "<q>": "Quit",
                "<ctrl-z>": "Suspend",
                "<space>": "Toggle",
            }"#,
        )?;

        assert_eq!(bindings.len(), 3);
        assert_eq!(
            bindings.action_for(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            bindings.action_for(&KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL)),
            Some(Action::Suspend)
        );
        assert_eq!(
            bindings.action_for(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            None
        );
        Ok(())
    }

    #[test]
    fn test_deserialize_rejects_bad_key() {
        let result = json5::from_str::<KeyBindings>(r#"{ "<hyper-q>": "Quit" }"#);
        assert!(result.is_err());
    }
}
