use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    core::{cmd::Cmd, msg::ui::UiMsg},
    domain::{notice::Notices, theme::Theme},
};

/// Tabs in display order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Tab {
    #[default]
    #[strum(to_string = "Analog Clock")]
    Analog,
    #[strum(to_string = "Digital Clock")]
    Digital,
    Stopwatch,
    Timer,
    Alarms,
}

impl Tab {
    pub fn index(self) -> usize {
        Tab::iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        let count = Tab::iter().count();
        Tab::iter().nth((self.index() + 1) % count).unwrap_or_default()
    }

    pub fn prev(self) -> Self {
        let count = Tab::iter().count();
        Tab::iter()
            .nth((self.index() + count - 1) % count)
            .unwrap_or_default()
    }
}

/// Form fields that accept text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Field {
    TimerDuration,
    AlarmTime,
    AlarmLabel,
}

/// High-level UI mode for keybindings and view switching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Normal,
    Editing(Field),
}

/// A single-line text field; content and cursor survive TextArea recreation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFieldState {
    pub content: String,
    /// Cursor column, in characters
    pub cursor: usize,
}

impl TextFieldState {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            cursor: content.chars().count(),
        }
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Delegates editing keys to tui-textarea's built-in logic
    pub fn apply_key(&mut self, key: KeyEvent) {
        use crossterm::event::Event;
        use tui_textarea::{CursorMove, TextArea};

        let mut textarea = TextArea::default();
        if !self.content.is_empty() {
            textarea.insert_str(&self.content);
        }
        textarea.move_cursor(CursorMove::Jump(
            0,
            u16::try_from(self.cursor).unwrap_or(u16::MAX),
        ));

        textarea.input(Event::Key(key));

        self.content = textarea.lines().join("");
        self.cursor = textarea.cursor().1;
    }
}

/// UI-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: Tab,
    pub theme: Theme,
    pub mode: UiMode,
    pub timer_input: TextFieldState,
    pub alarm_time_input: TextFieldState,
    pub alarm_label_input: TextFieldState,
    pub notices: Notices,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, UiMode::Editing(_))
    }

    pub fn has_notice(&self) -> bool {
        self.notices.current().is_some()
    }

    pub fn field(&self, field: Field) -> &TextFieldState {
        match field {
            Field::TimerDuration => &self.timer_input,
            Field::AlarmTime => &self.alarm_time_input,
            Field::AlarmLabel => &self.alarm_label_input,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut TextFieldState {
        match field {
            Field::TimerDuration => &mut self.timer_input,
            Field::AlarmTime => &mut self.alarm_time_input,
            Field::AlarmLabel => &mut self.alarm_label_input,
        }
    }

    /// UI-specific update function
    /// Returns: Generated commands
    ///
    /// `SubmitEdit` and `StartTimer` touch other tabs and are handled by the
    /// top-level update.
    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::NextTab => self.active_tab = self.active_tab.next(),
            UiMsg::PrevTab => self.active_tab = self.active_tab.prev(),
            UiMsg::SelectTab(tab) => self.active_tab = tab,
            UiMsg::NextTheme => {
                self.theme = self.theme.next();
                return vec![Cmd::LogInfo {
                    message: format!("theme switched to {}", self.theme),
                }];
            }
            UiMsg::DismissNotice => {
                self.notices.acknowledge();
            }
            UiMsg::BeginEdit => {
                self.mode = match self.active_tab {
                    Tab::Timer => UiMode::Editing(Field::TimerDuration),
                    Tab::Alarms => UiMode::Editing(Field::AlarmTime),
                    _ => UiMode::Normal,
                };
            }
            UiMsg::CancelEdit => self.mode = UiMode::Normal,
            UiMsg::FocusNextField => {
                self.mode = match self.mode {
                    UiMode::Editing(Field::AlarmTime) => UiMode::Editing(Field::AlarmLabel),
                    UiMode::Editing(Field::AlarmLabel) => UiMode::Editing(Field::AlarmTime),
                    other => other,
                };
            }
            UiMsg::ProcessInput(key) => {
                if let UiMode::Editing(field) = self.mode {
                    self.field_mut(field).apply_key(key);
                }
            }
            UiMsg::SubmitEdit | UiMsg::StartTimer => {}
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notice::Notice;
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Tab::Analog.next(), Tab::Digital);
        assert_eq!(Tab::Alarms.next(), Tab::Analog);
        assert_eq!(Tab::Analog.prev(), Tab::Alarms);
        assert_eq!(Tab::Timer.prev(), Tab::Stopwatch);
        assert_eq!(Tab::Alarms.index(), 4);
    }

    #[test]
    fn test_tab_titles() {
        let titles: Vec<String> = Tab::iter().map(|t| t.to_string()).collect();
        assert_eq!(
            titles,
            vec!["Analog Clock", "Digital Clock", "Stopwatch", "Timer", "Alarms"]
        );
    }

    #[test]
    fn test_text_field_editing() {
        let mut field = TextFieldState::default();
        for c in ['0', ':', '5'] {
            field.apply_key(key(KeyCode::Char(c)));
        }
        field.apply_key(key(KeyCode::Backspace));
        field.apply_key(key(KeyCode::Char('2')));
        assert_eq!(field.content, "0:2");
        assert_eq!(field.cursor, 3);

        field.apply_key(key(KeyCode::Home));
        field.apply_key(key(KeyCode::Char('1')));
        assert_eq!(field.content, "10:2");
        assert_eq!(field.cursor, 1);
    }

    #[test]
    fn test_begin_edit_depends_on_tab() {
        let mut ui = UiState::default();
        ui.update(UiMsg::BeginEdit);
        assert_eq!(ui.mode, UiMode::Normal);

        ui.update(UiMsg::SelectTab(Tab::Timer));
        ui.update(UiMsg::BeginEdit);
        assert_eq!(ui.mode, UiMode::Editing(Field::TimerDuration));

        ui.update(UiMsg::CancelEdit);
        ui.update(UiMsg::SelectTab(Tab::Alarms));
        ui.update(UiMsg::BeginEdit);
        assert_eq!(ui.mode, UiMode::Editing(Field::AlarmTime));
        ui.update(UiMsg::FocusNextField);
        assert_eq!(ui.mode, UiMode::Editing(Field::AlarmLabel));
        ui.update(UiMsg::FocusNextField);
        assert_eq!(ui.mode, UiMode::Editing(Field::AlarmTime));
    }

    #[test]
    fn test_input_goes_to_focused_field() {
        let mut ui = UiState::default();
        ui.update(UiMsg::SelectTab(Tab::Alarms));
        ui.update(UiMsg::BeginEdit);
        ui.update(UiMsg::ProcessInput(key(KeyCode::Char('7'))));
        ui.update(UiMsg::FocusNextField);
        ui.update(UiMsg::ProcessInput(key(KeyCode::Char('W'))));

        assert_eq!(ui.alarm_time_input.content, "7");
        assert_eq!(ui.alarm_label_input.content, "W");
        assert_eq!(ui.timer_input.content, "");
    }

    #[test]
    fn test_input_ignored_outside_edit_mode() {
        let mut ui = UiState::default();
        ui.update(UiMsg::ProcessInput(key(KeyCode::Char('7'))));
        assert_eq!(ui, UiState::default());
    }

    #[test]
    fn test_theme_switch_only_touches_theme() {
        let mut ui = UiState::new(Theme::Darkly);
        let cmds = ui.update(UiMsg::NextTheme);
        assert_eq!(ui.theme, Theme::Superhero);
        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn test_dismiss_notice() {
        let mut ui = UiState::default();
        ui.notices.push(Notice::timer_expired());
        assert!(ui.has_notice());
        ui.update(UiMsg::DismissNotice);
        assert!(!ui.has_notice());
    }
}
