//! Domain logic
//!
//! This module contains the clock-specific building blocks:
//! - Time sources (wall clock and monotonic)
//! - Display formatting for clocks, stopwatch and countdown
//! - User input parsing and validation
//! - Notices shown to the user
//! - Loop identities and their cadences
//! - Themes

pub mod clock;
pub mod format;
pub mod input;
pub mod notice;
pub mod schedule;
pub mod theme;
