//! Multi-valued field parsing.
//!
//! Input cells for genres, directors, cast, countries, and languages arrive
//! either as proper sequences or as comma-joined strings, optionally wrapped
//! in brackets and littered with stray quote characters. This module reduces
//! both shapes to the canonical form: a sequence of trimmed, non-empty
//! tokens. Parsing is idempotent: feeding an already-normalized sequence
//! back through yields the identical sequence.

use crate::error::{CinelabError, Result};
use crate::record::RawValue;

/// Parse a raw multi-valued field into a sequence of clean tokens.
///
/// - `List` input: each token is re-trimmed (a no-op on clean tokens) and
///   empty tokens are removed, so normalization is idempotent.
/// - `Text` input: an optional `[...]` wrapper is stripped, the content is
///   split on commas, and each token is trimmed of whitespace and stray
///   quote characters.
/// - `Null` input: an empty sequence (completeness is enforced later by the
///   record filter).
/// - Any other shape cannot be tokenized and is a malformed record.
///
/// # Examples
///
/// ```
/// use cinelab::normalize::list_field::parse_list_field;
/// use cinelab::record::RawValue;
///
/// let raw = RawValue::Text("['Drama', \"Crime\" , Thriller]".to_string());
/// let tokens = parse_list_field(&raw).unwrap();
/// assert_eq!(tokens, vec!["Drama", "Crime", "Thriller"]);
/// ```
pub fn parse_list_field(value: &RawValue) -> Result<Vec<String>> {
    match value {
        RawValue::List(items) => Ok(items
            .iter()
            .map(|item| clean_token(item))
            .filter(|item| !item.is_empty())
            .collect()),
        RawValue::Text(s) => {
            let inner = s.trim().trim_start_matches('[').trim_end_matches(']');
            Ok(inner
                .split(',')
                .map(clean_token)
                .filter(|item| !item.is_empty())
                .collect())
        }
        RawValue::Null => Ok(Vec::new()),
        other => Err(CinelabError::malformed(format!(
            "multi-valued field has unexpected shape: {other:?}"
        ))),
    }
}

/// Strip surrounding whitespace and quote characters from a token.
fn clean_token(token: &str) -> String {
    token
        .trim_matches(|c: char| c.is_whitespace() || c == '\'' || c == '"')
        .to_string()
}
