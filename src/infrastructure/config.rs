use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::{
        schedule::{DEFAULT_ALARM_POLL, DEFAULT_FPS},
        theme::Theme,
    },
    presentation::config::keybindings::KeyBindings,
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

const CONFIG_FILES: [(&str, config::FileFormat); 5] = [
    ("config.json5", config::FileFormat::Json5),
    ("config.json", config::FileFormat::Json),
    ("config.yaml", config::FileFormat::Yaml),
    ("config.toml", config::FileFormat::Toml),
    ("config.ini", config::FileFormat::Ini),
];

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Settings for the clock loops
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Analog face redraws per second
    pub fps: u32,
    pub alarm_poll_secs: u64,
    /// Ring the terminal bell on timer expiry and alarms
    pub bell: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            alarm_poll_secs: DEFAULT_ALARM_POLL.as_secs(),
            bell: true,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub clock: ClockConfig,
}

impl Config {
    /// Loads user configuration from the platform config directory
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_dirs(&utils::get_data_dir(), &utils::get_config_dir())
    }

    /// Layers any `config.*` files found in `config_dir` over the built-in
    /// defaults. A missing user file is not an error.
    pub fn from_dirs(data_dir: &Path, config_dir: &Path) -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;

        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().into_owned())?
            .set_default("_config_dir", config_dir.to_string_lossy().into_owned())?;

        let mut found_config = false;
        for (file, format) in &CONFIG_FILES {
            let path = config_dir.join(file);
            found_config |= path.exists();
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        if !found_config {
            log::info!("No configuration file found in {}", config_dir.display());
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // User bindings win; unbound defaults are kept
        for (key, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(*key).or_insert(*action);
        }

        Ok(cfg)
    }
}
