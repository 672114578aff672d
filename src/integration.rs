//! Integration layer
//!
//! Wires the pure core to the outside world:
//! - Runtime: translate and update, one clock reading per message
//! - Command execution against timers and the terminal
//! - Rendering
//! - The app runner's event loop

pub mod app_runner;
pub mod cmd_executor;
pub mod renderer;
pub mod runtime;
