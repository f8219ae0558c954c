//! Sleeper NFL Player Directory Export Library
//!
//! Downloads the Sleeper API's NFL player roster, maps every player id to a
//! display name, and writes the mapping as pretty-printed JSON.
//!
//! # Examples
//!
//! ```rust,no_run
//! use sleeper_roster::app;
//! use sleeper_roster::config::Config;
//! use sleeper_roster::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let summary = app::run(&Config::default()).await?;
//!     println!(
//!         "{} names written to {}",
//!         summary.names_written,
//!         summary.output_path.display()
//!     );
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod output;

// Re-export commonly used types for convenience
pub use app::{RunSummary, run};
pub use config::Config;
pub use data_fetcher::{PlayerDirectory, PlayerRecord, PlayerRecords, build_player_directory};
pub use error::AppError;
pub use output::{to_pretty_json, write_player_directory};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
