//! Free-text sanitization.

/// Reduce free text to letters, digits, and whitespace.
///
/// Every character outside the set {ASCII letters, digits, whitespace} is
/// removed. A pure, deterministic function of its input; tokenization and
/// casing are left to the feature builder.
///
/// # Examples
///
/// ```
/// use cinelab::text::sanitize;
///
/// assert_eq!(sanitize("It's 1995; a heist!"), "Its 1995 a heist");
/// ```
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect()
}
