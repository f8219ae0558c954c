//! Single-shot HTTP GET with JSON decoding and status-aware errors

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::constants::RESPONSE_PREVIEW_CHARS;
use crate::error::AppError;

/// Fetches `url` once and decodes the body as `T`.
///
/// There is no retry: the first transport failure, non-success status or
/// undecodable body is returned as an [`AppError`].
///
/// # Errors
/// * `NetworkTimeout` / `NetworkConnection` / `ApiFetch` - transport failures
/// * Status-specific variants from [`AppError::from_status`] - non-2xx responses
/// * `ApiNoData` - empty body
/// * `ApiMalformedJson` - body does not look like JSON
/// * `ApiUnexpectedStructure` - JSON that does not match `T`
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);
        return Err(AppError::from_status(status_code, reason, url));
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    parse_response(&response_text, url)
}

/// Decodes a response body, classifying failures by what the body looks like.
pub(super) fn parse_response<T: DeserializeOwned>(
    response_text: &str,
    url: &str,
) -> Result<T, AppError> {
    serde_json::from_str::<T>(response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        error!(
            "Response text (first {} chars): {}",
            RESPONSE_PREVIEW_CHARS,
            response_text
                .chars()
                .take(RESPONSE_PREVIEW_CHARS)
                .collect::<String>()
        );

        let trimmed = response_text.trim_start();
        if trimmed.is_empty() {
            AppError::api_no_data("Response body is empty", url)
        } else if e.is_syntax() || e.is_eof() {
            AppError::api_malformed_json(e.to_string(), url)
        } else {
            AppError::api_unexpected_structure(e.to_string(), url)
        }
    })
}
