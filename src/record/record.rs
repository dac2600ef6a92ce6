//! The normalized movie record.

use serde::{Deserialize, Serialize};

/// A fully normalized movie record.
///
/// Constructed once by the normalizer from a [`RawRecord`](super::RawRecord)
/// and treated as immutable once it reaches the feature builder. Every
/// multi-valued attribute is a sequence of trimmed, non-empty strings; the
/// derived display fields (`votes_display`, `runtime_display`) and numeric
/// companions (`votes`, `runtime_minutes`, `decade`) are computed by the
/// normalizer and never re-derived downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: Option<String>,
    /// User rating, mean-imputed when missing.
    pub rating: f64,
    /// Raw vote count, mean-imputed when missing. Kept for numeric work;
    /// `votes_display` is never parsed back.
    pub votes: f64,
    /// Human-readable vote magnitude, e.g. "1.5M" or "15K".
    pub votes_display: String,
    /// Runtime in minutes; exactly inverts `runtime_display`.
    pub runtime_minutes: f64,
    /// Runtime as "H:MM:SS".
    pub runtime_display: String,
    pub year: Option<i32>,
    /// Release decade, e.g. 1994 → 1990.
    pub decade: Option<i32>,
    /// Canonical content-rating label, or an unchanged pass-through for
    /// labels outside the canonical vocabulary. Empty when unlabeled.
    pub certificate: String,
    pub genres: Vec<String>,
    pub directors: Vec<String>,
    pub cast: Vec<String>,
    /// Plot text reduced to letters, digits, and whitespace.
    pub plot: String,
    pub countries: Vec<String>,
    pub languages: Vec<String>,
}

impl MovieRecord {
    /// True when the record carries a non-blank content-rating label.
    pub fn has_certificate(&self) -> bool {
        !self.certificate.trim().is_empty()
    }
}
