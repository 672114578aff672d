//! Logging utilities

use std::{env, fs, path::Path};

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{filter::EnvFilter, prelude::*, Layer};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

/// Filter used when neither `RUST_LOG` nor the project log env var is set
pub fn default_directives() -> String {
    format!("{}=info", env!("CARGO_CRATE_NAME"))
}

/// Resolves filter directives, preferring `RUST_LOG` over the project variable
fn directives() -> String {
    env::var("RUST_LOG")
        .or_else(|_| env::var(LOG_ENV.as_str()))
        .unwrap_or_else(|_| default_directives())
}

/// Installs a file subscriber at `<data_dir>/tickdeck.log`. The terminal is
/// owned by the UI, so nothing is logged to stdout.
pub fn initialize_logging() -> Result<()> {
    initialize_logging_in(&get_data_dir())
}

pub fn initialize_logging_in(directory: &Path) -> Result<()> {
    fs::create_dir_all(directory)?;
    let log_path = directory.join(LOG_FILE.as_str());
    let log_file = fs::File::create(log_path)?;

    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(directives()));
    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}
