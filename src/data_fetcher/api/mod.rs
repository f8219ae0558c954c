pub mod http_client;
mod fetch_utils;
mod players;

// Re-export HTTP client utilities
pub use http_client::*;
// Re-export endpoint functions
pub use players::fetch_players;
