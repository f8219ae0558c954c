//! Application-wide constants
//!
//! Fixed endpoint, output location and formatting values used by the
//! fetch/transform/write pipeline.

/// Sleeper endpoint returning every NFL player keyed by player id
pub const SLEEPER_PLAYERS_URL: &str = "https://api.sleeper.app/v1/players/nfl";

/// Output file, relative to the current working directory
pub const OUTPUT_FILE_NAME: &str = "player_names.json";

/// Indentation used for the output JSON
pub const JSON_INDENT: &[u8] = b"    ";

/// Maximum number of idle connections per host kept by the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 1;

/// Default `tracing` directive when `RUST_LOG` does not override it
pub const DEFAULT_LOG_DIRECTIVE: &str = "sleeper_roster=info";

/// Number of response body characters included in debug logs
pub const RESPONSE_PREVIEW_CHARS: usize = 200;
