use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::core::state::ui::Tab;

/// Messages specific to UiState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    // Tabs
    NextTab,
    PrevTab,
    SelectTab(Tab),

    // Presentation
    NextTheme,

    // Notices
    DismissNotice,

    // Form editing
    BeginEdit,
    CancelEdit,
    SubmitEdit,
    FocusNextField,
    ProcessInput(KeyEvent),

    /// Start the countdown from whatever the timer field holds
    StartTimer,
}

impl UiMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, UiMsg::ProcessInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_ui_msg_frequent_detection() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(UiMsg::ProcessInput(key).is_frequent());
        assert!(!UiMsg::SubmitEdit.is_frequent());
    }
}
