//! Presentation layer
//!
//! - Components, one per tab, plus the screen frame around them
//! - Reusable widgets
//! - Configuration (theme palettes, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
