//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation (real terminal and test backend)
//! - CLI argument processing
//! - Configuration loading
//! - Tick scheduling

pub mod cli;
pub mod config;
pub mod timer_service;
pub mod tui;
