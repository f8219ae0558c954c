//! HTTP client creation

use crate::{NAME, VERSION};
use reqwest::Client;

/// `User-Agent` sent with every request, e.g. `sleeper_roster/0.1.0`
pub fn user_agent() -> String {
    format!("{NAME}/{VERSION}")
}

/// Creates the HTTP client used for the roster download.
///
/// No request timeout is set: the download runs until the server responds
/// or the connection fails.
pub fn create_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent())
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}
