//! String helpers for names, tags and search queries.

/// Trims `value` and returns `None` when nothing is left.
///
/// # Examples
///
/// ```
/// use legends_domain::common::trimmed_non_empty;
///
/// assert_eq!(trimmed_non_empty("  Tank "), Some("Tank"));
/// assert_eq!(trimmed_non_empty("   "), None);
/// ```
pub fn trimmed_non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Case-insensitive equality, used to match free-typed realm names.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive substring match. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Lowercase, dash-separated slug made of the alphanumeric runs of `value`.
///
/// # Examples
///
/// ```
/// use legends_domain::common::slugify;
///
/// assert_eq!(slugify("Baldur's Gate 3"), "baldur-s-gate-3");
/// ```
pub fn slugify(value: &str) -> String {
    value
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
