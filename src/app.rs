use crate::config::Config;
use crate::data_fetcher::api::{create_http_client, fetch_players};
use crate::data_fetcher::processors::build_player_directory;
use crate::error::AppError;
use crate::output::write_player_directory;
use std::path::PathBuf;
use tracing::info;

/// Outcome of a completed export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Records received from the players endpoint
    pub records_fetched: usize,
    /// Entries written to the player directory
    pub names_written: usize,
    pub output_path: PathBuf,
}

/// Run the export flow once.
///
/// - Validates the config
/// - Downloads the roster with a single request
/// - Builds the player directory
/// - Overwrites the output file
///
/// Any failure aborts the run; nothing is retried and a previously written
/// output file is left as-is unless the write step itself was reached.
pub async fn run(config: &Config) -> Result<RunSummary, AppError> {
    config.validate()?;

    let client = create_http_client()?;
    let records = fetch_players(&client, &config.players_url).await?;

    let directory = build_player_directory(&records);
    info!(
        "Resolved {} of {} players to display names",
        directory.len(),
        records.len()
    );

    write_player_directory(&directory, &config.output_path).await?;
    info!("Player directory written to {}", config.output_path.display());

    Ok(RunSummary {
        records_fetched: records.len(),
        names_written: directory.len(),
        output_path: config.output_path.clone(),
    })
}
