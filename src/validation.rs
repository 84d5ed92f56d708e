use crate::error::{GraphError, GraphResult};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> GraphResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(GraphError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Trims group labels, drops blank ones and removes duplicates,
/// keeping the first occurrence of each label.
pub fn normalize_labels<I, S>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for label in labels {
        let trimmed = label.as_ref().trim();
        if !trimmed.is_empty() && !out.iter().any(|l| l == trimmed) {
            out.push(trimmed.to_string());
        }
    }
    out
}
