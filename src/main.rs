use clap::Parser;
use color_eyre::eyre::Result;

use tickdeck::{
    infrastructure::{cli::Cli, config::Config, tui::real::RealTui},
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // File-based configuration, then command-line overrides
    let config = args.apply(Config::new()?);
    log::info!(
        "starting with theme {} at {} fps",
        config.theme,
        config.clock.fps
    );

    let tui = RealTui::new()?.frame_rate(args.frame_rate);
    let mut runner = AppRunner::new(config, tui);
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
