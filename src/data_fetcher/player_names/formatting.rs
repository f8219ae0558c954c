//! Player display name building.

/// Builds a full name from first and last name components.
///
/// Components are joined with a single space and no trimming is applied.
///
/// # Example
/// ```
/// use sleeper_roster::data_fetcher::player_names::build_full_name;
///
/// let full_name = build_full_name("Patrick", "Mahomes");
/// assert_eq!(full_name, "Patrick Mahomes");
/// ```
pub fn build_full_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}

/// Builds the display name stored in the player directory.
///
/// Missing components count as empty strings. The joined name is trimmed of
/// leading and trailing whitespace; interior whitespace is left untouched.
///
/// # Returns
/// * `Some(String)` - The trimmed, non-empty display name
/// * `None` - Both components were missing, empty or whitespace only
///
/// # Examples
/// ```
/// use sleeper_roster::data_fetcher::player_names::build_display_name;
///
/// assert_eq!(build_display_name(Some("Tom"), Some("Brady")).as_deref(), Some("Tom Brady"));
/// assert_eq!(build_display_name(Some("Bo"), None).as_deref(), Some("Bo"));
/// assert_eq!(build_display_name(Some(""), Some("")), None);
/// ```
pub fn build_display_name(first_name: Option<&str>, last_name: Option<&str>) -> Option<String> {
    let full_name = build_full_name(first_name.unwrap_or(""), last_name.unwrap_or(""));
    let trimmed = full_name.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
