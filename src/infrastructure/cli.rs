use clap::Parser;

use crate::{
    domain::theme::Theme,
    infrastructure::config::Config,
    utils::version,
};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Terminal render rate (frames per second)
    #[arg(short, long, value_name = "FLOAT", default_value_t = 30.0)]
    pub frame_rate: f64,

    /// Analog face update rate, overriding the config file
    #[arg(long, value_name = "INT")]
    pub fps: Option<u32>,

    /// Initial theme, overriding the config file
    #[arg(short, long, value_name = "NAME")]
    pub theme: Option<Theme>,

    /// Seconds between alarm checks, overriding the config file
    #[arg(long, value_name = "SECS")]
    pub alarm_poll: Option<u64>,

    /// Do not ring the terminal bell
    #[arg(long)]
    pub no_bell: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(fps) = self.fps {
            config.clock.fps = fps;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(secs) = self.alarm_poll {
            config.clock.alarm_poll_secs = secs;
        }
        if self.no_bell {
            config.clock.bell = false;
        }
        config
    }
}
