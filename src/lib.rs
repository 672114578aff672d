//! # Tickdeck - a terminal clock
//!
//! Analog face, digital readout, stopwatch, countdown timer and alarms in one
//! ratatui application, built around an Elm-like architecture.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state, one view-model per tab
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects, including rescheduling loops
//! - **View** (`presentation::components`): rendering from state
//!
//! Every periodic loop is a message that asks to be scheduled again. A tick
//! handler that does not reschedule ends its loop.
//!
//! ## Example Usage
//!
//! ```rust
//! use std::time::Instant;
//!
//! use chrono::NaiveDate;
//! use tickdeck::{
//!     core::msg::stopwatch::StopwatchMsg,
//!     domain::clock::Now,
//!     AppState, Msg,
//! };
//!
//! let local = NaiveDate::from_ymd_opt(2024, 5, 1)
//!     .and_then(|d| d.and_hms_opt(9, 0, 0))
//!     .unwrap();
//! let now = Now::new(Instant::now(), local);
//!
//! let msg = Msg::Stopwatch(StopwatchMsg::Start);
//! let (state, commands) = tickdeck::update(msg, AppState::default(), now);
//!
//! assert!(state.stopwatch.is_running());
//! assert_eq!(commands.len(), 1);
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
