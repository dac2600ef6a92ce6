//! Content-rating label canonicalization.
//!
//! Raw certificate labels are wildly inconsistent ("Not Rated", "nc17",
//! "GP", "M/PG", "+18", "TV 14", ...). Canonicalization upper-cases and
//! trims the label, then applies an ordered chain of regex rewrite rules
//! that collapse synonymous spellings into a fixed target vocabulary:
//!
//! > G, PG, PG-13, NC-17, UNRATED, TV-G, TV-PG, TV-14, TV-MA
//!
//! with "PASSED"/"APPROVED" collapsing to G.
//!
//! Rule order is a load-bearing part of the contract: later rules re-match
//! strings partially rewritten by earlier rules. The "18" rule turns the 18
//! token into NC-17 and the collapse rule then swallows the surrounding
//! text, which is why "PG-18" resolves to "NC-17" before any PG rule can
//! touch it. Do not reorder the chain even though individual rules look
//! independent.
//!
//! A label matching no rule passes through unchanged. This open-vocabulary
//! tail is deliberate: unknown certificates form their own observed bucket
//! and are surfaced in aggregate by the normalizer summary, never silently
//! reclassified.

use std::sync::LazyLock;

use regex::Regex;

/// The canonical content-rating vocabulary.
pub const CANONICAL_LABELS: &[&str] = &[
    "G", "PG", "PG-13", "NC-17", "UNRATED", "TV-G", "TV-PG", "TV-14", "TV-MA",
];

/// The ordered rewrite chain. Applied strictly in sequence.
static REWRITE_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // Adult labels first: the 18 token becomes NC-17, then any label
        // containing an NC17 spelling collapses to exactly NC-17.
        (r"\+?18", "NC-17"),
        (r".*NC[-/]?17.*", "NC-17"),
        // Legacy MPAA spellings.
        (r"\bM(/PG)?\b", "PG"),
        (r"\bGP\b", "PG"),
        // PG-13 must be recognized before the bare PG rule.
        (r"\bPG[- ]?13\b", "PG-13"),
        (r"\bPG\b", "PG"),
        (r"\bNOT RATED\b|\bUNRATED\b", "UNRATED"),
        (r"\bPASSED\b|\bAPPROVED\b", "G"),
        // Television ratings tolerate space or hyphen separators.
        (r"\bTV[\s-]?G\b", "TV-G"),
        (r"\bTV[\s-]?PG\b", "TV-PG"),
        (r"\bTV[\s-]?14\b", "TV-14"),
        (r"\bTV[\s-]?MA\b", "TV-MA"),
    ]
    .iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("rewrite rule pattern should be valid"),
            *replacement,
        )
    })
    .collect()
});

/// Canonicalize a raw content-rating label.
///
/// # Examples
///
/// ```
/// use cinelab::normalize::rating::canonicalize_rating;
///
/// assert_eq!(canonicalize_rating("not rated"), "UNRATED");
/// assert_eq!(canonicalize_rating("gp"), "PG");
/// assert_eq!(canonicalize_rating("PG-18"), "NC-17");
/// assert_eq!(canonicalize_rating("Approved"), "G");
/// ```
pub fn canonicalize_rating(label: &str) -> String {
    let mut current = label.trim().to_uppercase();
    for (pattern, replacement) in REWRITE_RULES.iter() {
        current = pattern.replace_all(&current, *replacement).into_owned();
    }
    current.trim().to_string()
}

/// Check whether a label belongs to the canonical vocabulary.
pub fn is_canonical(label: &str) -> bool {
    CANONICAL_LABELS.contains(&label)
}
