pub mod api;
pub mod models;
pub mod player_names;
pub mod processors;

pub use api::fetch_players;
pub use models::{PlayerDirectory, PlayerId, PlayerRecord, PlayerRecords};
pub use processors::build_player_directory;
