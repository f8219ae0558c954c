//! Sleeper players endpoint

use reqwest::Client;
use tracing::info;

use super::fetch_utils::fetch;
use crate::data_fetcher::models::PlayerRecords;
use crate::error::AppError;

/// Downloads the full player roster from `url`.
///
/// The endpoint returns one JSON object keyed by player id; the response is
/// tens of megabytes and is decoded in one go.
///
/// # Example
/// ```rust,no_run
/// use sleeper_roster::constants::SLEEPER_PLAYERS_URL;
/// use sleeper_roster::data_fetcher::api::{create_http_client, fetch_players};
///
/// #[tokio::main]
/// async fn main() -> Result<(), sleeper_roster::AppError> {
///     let client = create_http_client()?;
///     let records = fetch_players(&client, SLEEPER_PLAYERS_URL).await?;
///     println!("{} players", records.len());
///     Ok(())
/// }
/// ```
pub async fn fetch_players(client: &Client, url: &str) -> Result<PlayerRecords, AppError> {
    let records: PlayerRecords = fetch(client, url).await?;
    info!("Fetched {} player records", records.len());
    Ok(records)
}
