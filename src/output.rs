//! Player directory JSON output

use crate::constants::JSON_INDENT;
use crate::data_fetcher::models::PlayerDirectory;
use crate::error::AppError;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error};

/// Serializes the directory as JSON indented with four spaces.
///
/// Non-ASCII characters are written as UTF-8, not escaped. There is no
/// trailing newline and an empty directory is rendered as `{}`.
pub fn to_pretty_json(directory: &PlayerDirectory) -> Result<String, AppError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    directory.serialize(&mut ser)?;

    // serde_json only emits valid UTF-8
    String::from_utf8(buf).map_err(|e| AppError::Io(std::io::Error::other(e)))
}

/// Writes the directory to `path`, replacing any existing file.
///
/// The file handle is dropped before returning on every path. A failure
/// part-way through can leave a truncated file behind.
pub async fn write_player_directory(
    directory: &PlayerDirectory,
    path: &Path,
) -> Result<(), AppError> {
    let content = to_pretty_json(directory)?;

    let mut file = fs::File::create(path).await.map_err(|e| {
        error!("Failed to create {}: {}", path.display(), e);
        AppError::Io(e)
    })?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{PlayerRecord, PlayerRecords};
    use crate::data_fetcher::processors::build_player_directory;
    use tempfile::tempdir;

    fn directory_from(entries: &[(&str, Option<&str>, Option<&str>)]) -> PlayerDirectory {
        let records: PlayerRecords = entries
            .iter()
            .map(|(id, first, last)| {
                (
                    id.to_string(),
                    PlayerRecord {
                        first_name: first.map(str::to_string),
                        last_name: last.map(str::to_string),
                    },
                )
            })
            .collect();
        build_player_directory(&records)
    }

    #[test]
    fn test_pretty_json_layout() {
        let directory = directory_from(&[
            ("100", Some("Tom"), Some("Brady")),
            ("102", Some("Bo"), None),
        ]);

        let json = to_pretty_json(&directory).unwrap();
        assert_eq!(json, "{\n    \"100\": \"Tom Brady\",\n    \"102\": \"Bo\"\n}");
    }

    #[test]
    fn test_pretty_json_empty_directory() {
        let json = to_pretty_json(&PlayerDirectory::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_pretty_json_keeps_utf8_and_escapes_quotes() {
        let directory = directory_from(&[("7", Some("Rondé"), Some("\"Bull\" Barber"))]);

        let json = to_pretty_json(&directory).unwrap();
        assert_eq!(json, "{\n    \"7\": \"Rondé \\\"Bull\\\" Barber\"\n}");
    }

    #[tokio::test]
    async fn test_write_player_directory_overwrites() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("player_names.json");
        tokio::fs::write(&path, "stale content that is much longer than the new file")
            .await
            .unwrap();

        let directory = directory_from(&[("100", Some("Tom"), Some("Brady"))]);
        write_player_directory(&directory, &path).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "{\n    \"100\": \"Tom Brady\"\n}");
    }

    #[tokio::test]
    async fn test_write_player_directory_missing_parent_dir() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing").join("player_names.json");

        let result = write_player_directory(&PlayerDirectory::default(), &path).await;
        assert!(matches!(result, Err(AppError::Io(_))));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_write_twice_is_byte_identical() {
        let temp_dir = tempdir().unwrap();
        let first = temp_dir.path().join("first.json");
        let second = temp_dir.path().join("second.json");
        let directory = directory_from(&[
            ("3", Some("C"), None),
            ("1", Some("A"), Some("One")),
            ("2", None, Some("B")),
        ]);

        write_player_directory(&directory, &first).await.unwrap();
        write_player_directory(&directory, &second).await.unwrap();

        let a = tokio::fs::read(&first).await.unwrap();
        let b = tokio::fs::read(&second).await.unwrap();
        assert_eq!(a, b);
    }
}
