use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::models::Suggestion;

/// Greedy match from the first `[` to the last `]`, across newlines.
static JSON_ARRAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*\]").expect("valid regex"));

#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("no JSON array found in model output")]
    NoArray,

    #[error("model output is not a valid JSON array: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Returns the bracket-delimited array embedded in free-form model text.
pub fn extract_json_array(raw: &str) -> Option<&str> {
    JSON_ARRAY_RE.find(raw).map(|m| m.as_str())
}

/// Extracts and parses the suggestion array from raw model output.
///
/// Elements that are not objects, or whose `title` or `reason` is missing,
/// not a string, or blank after trimming, are skipped.
pub fn parse_suggestions(raw: &str) -> Result<Vec<Suggestion>, ExtractError> {
    let array = extract_json_array(raw).ok_or(ExtractError::NoArray)?;
    let entries: Vec<Value> = serde_json::from_str(array)?;

    let suggestions: Vec<Suggestion> = entries.iter().filter_map(to_suggestion).collect();

    if suggestions.len() < entries.len() {
        tracing::debug!(
            parsed = entries.len(),
            kept = suggestions.len(),
            "Skipped incomplete suggestion entries"
        );
    }

    Ok(suggestions)
}

fn to_suggestion(entry: &Value) -> Option<Suggestion> {
    let field = |name: &str| {
        entry
            .get(name)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    Some(Suggestion {
        title: field("title")?,
        reason: field("reason")?,
    })
}
