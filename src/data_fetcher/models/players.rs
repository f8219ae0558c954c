use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Opaque upstream identifier of a player, e.g. `"4046"` or `"DET"` for team defenses.
pub type PlayerId = String;

/// Raw per-player object from the Sleeper roster.
///
/// Only the name fields are read; every other attribute is ignored during
/// deserialization. An absent key and a JSON `null` both become `None`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct PlayerRecord {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// The full roster as returned by the players endpoint, keyed by player id.
pub type PlayerRecords = HashMap<PlayerId, PlayerRecord>;

/// Player id to display name mapping written to disk.
///
/// Every value is a non-empty display name. Entries are kept sorted by id so
/// the serialized form is stable across runs.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct PlayerDirectory {
    names: BTreeMap<PlayerId, String>,
}

impl PlayerDirectory {
    pub(crate) fn from_names(names: BTreeMap<PlayerId, String>) -> Self {
        Self { names }
    }

    pub fn get(&self, player_id: &str) -> Option<&str> {
        self.names.get(player_id).map(String::as_str)
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.names.contains_key(player_id)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates entries in ascending player id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }
}
