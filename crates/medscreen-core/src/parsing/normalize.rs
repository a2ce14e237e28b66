/// Normalize raw report text for matching.
///
/// Replaces newlines and carriage returns with spaces, collapses runs of
/// whitespace to a single space, and lowercases. Idempotent; empty input
/// yields an empty string.
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
