//! Text normalization applied ahead of comparison

/// Canonical form of a free-text field: trimmed and lower-cased
///
/// # Examples
///
/// ```
/// use kindred_matcher::normalize::normalize;
///
/// assert_eq!(normalize("  John SMITH "), "john smith");
/// ```
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Canonical form of a place name
///
/// Like [`normalize`], but also drops `.` and `,` and collapses runs of
/// whitespace, so "St. Petersburg" and "st  petersburg" agree.
pub fn normalize_place(text: &str) -> String {
    let stripped: String = text
        .chars()
        .map(|c| if c == '.' || c == ',' { ' ' } else { c })
        .collect();

    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
