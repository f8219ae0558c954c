// src/main.rs
mod cli;
mod logging;

use clap::Parser;
use cli::Args;
use sleeper_roster::app;
use sleeper_roster::config::Config;
use sleeper_roster::error::AppError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let _args = Args::parse();

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let _guard = logging::setup_logging()?;

    let summary = app::run(&Config::default()).await?;

    println!(
        "Player data has been written to {}",
        summary.output_path.display()
    );
    Ok(())
}
