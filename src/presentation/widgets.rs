//! Reusable widgets
//!
//! Widgets render a borrowed slice of state into a buffer and own nothing.

pub mod clock_face;
pub mod notice_popup;
pub mod status_bar;
pub mod tab_bar;
pub mod text_field;
