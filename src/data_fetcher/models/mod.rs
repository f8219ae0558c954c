pub mod players;

pub use players::{PlayerDirectory, PlayerId, PlayerRecord, PlayerRecords};
