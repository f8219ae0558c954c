//! Turns the fetched roster into the player directory.

use crate::data_fetcher::models::{PlayerDirectory, PlayerRecords};
use crate::data_fetcher::player_names::build_display_name;
use std::collections::BTreeMap;
use tracing::debug;

/// Builds the player directory from the fetched roster.
///
/// Each record contributes `player_id -> "<first> <last>"` (trimmed). Records
/// whose name comes out empty are left out. This never fails: missing name
/// fields are treated as empty strings.
///
/// # Example
/// ```
/// use sleeper_roster::data_fetcher::models::{PlayerRecord, PlayerRecords};
/// use sleeper_roster::data_fetcher::processors::build_player_directory;
///
/// let mut records = PlayerRecords::new();
/// records.insert(
///     "100".to_string(),
///     PlayerRecord { first_name: Some("Tom".into()), last_name: Some("Brady".into()) },
/// );
///
/// let directory = build_player_directory(&records);
/// assert_eq!(directory.get("100"), Some("Tom Brady"));
/// ```
pub fn build_player_directory(records: &PlayerRecords) -> PlayerDirectory {
    let names: BTreeMap<_, _> = records
        .iter()
        .filter_map(|(player_id, record)| {
            build_display_name(record.first_name.as_deref(), record.last_name.as_deref())
                .map(|name| (player_id.clone(), name))
        })
        .collect();

    debug!(
        "Built player directory: {} named, {} skipped without a name",
        names.len(),
        records.len() - names.len()
    );

    PlayerDirectory::from_names(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::PlayerRecord;

    fn record(first: Option<&str>, last: Option<&str>) -> PlayerRecord {
        PlayerRecord {
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
        }
    }

    #[test]
    fn test_full_name_entry() {
        let mut records = PlayerRecords::new();
        records.insert("100".to_string(), record(Some("Tom"), Some("Brady")));

        let directory = build_player_directory(&records);
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.get("100"), Some("Tom Brady"));
    }

    #[test]
    fn test_empty_names_are_omitted() {
        let mut records = PlayerRecords::new();
        records.insert("101".to_string(), record(Some(""), Some("")));
        records.insert("103".to_string(), record(None, None));
        records.insert("104".to_string(), record(Some(" "), None));

        let directory = build_player_directory(&records);
        assert!(directory.is_empty());
        assert!(!directory.contains("101"));
    }

    #[test]
    fn test_first_name_only_is_kept() {
        let mut records = PlayerRecords::new();
        records.insert("102".to_string(), record(Some("Bo"), None));

        let directory = build_player_directory(&records);
        assert_eq!(directory.get("102"), Some("Bo"));
    }

    #[test]
    fn test_mixed_roster() {
        let mut records = PlayerRecords::new();
        records.insert("100".to_string(), record(Some("Tom"), Some("Brady")));
        records.insert("101".to_string(), record(Some(""), Some("")));
        records.insert("102".to_string(), record(Some("Bo"), None));
        records.insert("KC".to_string(), record(Some("Kansas City"), Some("Chiefs")));

        let directory = build_player_directory(&records);
        assert_eq!(directory.len(), 3);
        for (_, name) in directory.iter() {
            assert!(!name.is_empty());
            assert_eq!(name, name.trim());
        }
        assert_eq!(directory.get("KC"), Some("Kansas City Chiefs"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let mut records = PlayerRecords::new();
        for i in 0..50 {
            records.insert(format!("{i}"), record(Some("Player"), Some(&format!("{i}"))));
        }

        assert_eq!(build_player_directory(&records), build_player_directory(&records));
    }
}
