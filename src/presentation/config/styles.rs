use ratatui::style::{Color, Modifier, Style};

use crate::domain::theme::Theme;

/// Colors a theme assigns to each role on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub primary: Color,
    pub success: Color,
    pub info: Color,
    pub warning: Color,
    pub danger: Color,
    pub dial: Color,
    pub major_tick: Color,
    pub minor_tick: Color,
    pub hour_hand: Color,
    pub minute_hand: Color,
    pub second_hand: Color,
}

impl Palette {
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

// Hands and dial keep the same colors across dark themes; light themes darken them.
const DIAL: Color = rgb(0x3bc9db);
const MAJOR_TICK: Color = rgb(0x15aabf);
const MINOR_TICK: Color = rgb(0x4dabf7);
const HOUR_HAND: Color = rgb(0xff6b6b);
const MINUTE_HAND: Color = rgb(0xffd43b);
const SECOND_HAND: Color = rgb(0x69db7c);

pub fn palette(theme: Theme) -> Palette {
    let dark_hands = Palette {
        background: rgb(0x222222),
        foreground: rgb(0xffffff),
        muted: rgb(0x888888),
        border: rgb(0x444444),
        primary: rgb(0x375a7f),
        success: rgb(0x00bc8c),
        info: rgb(0x3498db),
        warning: rgb(0xf39c12),
        danger: rgb(0xe74c3c),
        dial: DIAL,
        major_tick: MAJOR_TICK,
        minor_tick: MINOR_TICK,
        hour_hand: HOUR_HAND,
        minute_hand: MINUTE_HAND,
        second_hand: SECOND_HAND,
    };

    match theme {
        Theme::Darkly => dark_hands,
        Theme::Superhero => Palette {
            background: rgb(0x2b3e50),
            foreground: rgb(0xebebeb),
            muted: rgb(0x8a97a3),
            border: rgb(0x4e5d6c),
            primary: rgb(0xdf691a),
            success: rgb(0x5cb85c),
            info: rgb(0x5bc0de),
            warning: rgb(0xffc107),
            danger: rgb(0xd9534f),
            ..dark_hands
        },
        Theme::Cyborg => Palette {
            background: rgb(0x060606),
            foreground: rgb(0xadafae),
            muted: rgb(0x555555),
            border: rgb(0x282828),
            primary: rgb(0x2a9fd6),
            success: rgb(0x77b300),
            info: rgb(0x9933cc),
            warning: rgb(0xff8800),
            danger: rgb(0xcc0000),
            ..dark_hands
        },
        Theme::Solar => Palette {
            background: rgb(0x002b36),
            foreground: rgb(0x839496),
            muted: rgb(0x586e75),
            border: rgb(0x073642),
            primary: rgb(0xb58900),
            success: rgb(0x2aa198),
            info: rgb(0x268bd2),
            warning: rgb(0xcb4b16),
            danger: rgb(0xd33682),
            ..dark_hands
        },
        Theme::Flatly => Palette {
            background: rgb(0xffffff),
            foreground: rgb(0x212529),
            muted: rgb(0x7b8a8b),
            border: rgb(0xced4da),
            primary: rgb(0x2c3e50),
            success: rgb(0x18bc9c),
            info: rgb(0x3498db),
            warning: rgb(0xf39c12),
            danger: rgb(0xe74c3c),
            dial: rgb(0x1c7ed6),
            major_tick: rgb(0x1864ab),
            minor_tick: rgb(0x74c0fc),
            hour_hand: rgb(0xc92a2a),
            minute_hand: rgb(0xe67700),
            second_hand: rgb(0x2b8a3e),
        },
        Theme::Minty => Palette {
            background: rgb(0xffffff),
            foreground: rgb(0x5a5a5a),
            muted: rgb(0x888888),
            border: rgb(0xe0e0e0),
            primary: rgb(0x78c2ad),
            success: rgb(0x56cc9d),
            info: rgb(0x6cc3d5),
            warning: rgb(0xffce67),
            danger: rgb(0xff7851),
            dial: rgb(0x78c2ad),
            major_tick: rgb(0x4f9a86),
            minor_tick: rgb(0xa8dccd),
            hour_hand: rgb(0xf3969a),
            minute_hand: rgb(0xe0a800),
            second_hand: rgb(0x56cc9d),
        },
    }
}
