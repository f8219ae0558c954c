//! Player name building for the player directory.

mod formatting;

pub use formatting::{build_display_name, build_full_name};
