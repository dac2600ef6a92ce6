//! Raw field values at the ingestion boundary.
//!
//! Multi-valued columns in the wild arrive either as proper sequences or as
//! delimiter-joined strings (optionally bracket-wrapped, with stray quote
//! characters). [`RawValue`] models this "string or list" shape as a tagged
//! variant; everything past the field normalizer works with the single
//! canonical sequence form instead.
//!
//! # Examples
//!
//! ```
//! use cinelab::record::RawValue;
//!
//! let joined = RawValue::Text("Drama, Crime".to_string());
//! let parsed = RawValue::List(vec!["Drama".to_string(), "Crime".to_string()]);
//!
//! assert_eq!(joined.as_text(), Some("Drama, Crime"));
//! assert!(parsed.as_text().is_none());
//! ```

use serde::{Deserialize, Serialize};

/// A raw field value as it arrives from the input file or a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawValue {
    /// Free text, including delimiter-joined multi-valued cells
    Text(String),
    /// An already-parsed sequence of strings
    List(Vec<String>),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Missing value
    Null,
}

impl RawValue {
    /// Get the text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as text, stringifying numeric values.
    ///
    /// Used for free-text and categorical-scalar columns where a cell that
    /// happens to look numeric (a plot of "2001", a certificate of "12")
    /// is still text.
    pub fn as_text_lossy(&self) -> Option<String> {
        match self {
            RawValue::Text(s) => Some(s.clone()),
            RawValue::Integer(i) => Some(i.to_string()),
            RawValue::Float(f) => Some(f.to_string()),
            RawValue::List(_) | RawValue::Null => None,
        }
    }

    /// Get the value as a float, accepting both integer and float shapes.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Integer(i) => Some(*i as f64),
            RawValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Check if the value is missing.
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// Infer a raw value from a string cell.
    ///
    /// Empty cells become `Null`; integer- and float-shaped cells become
    /// numeric; everything else stays text.
    pub fn infer(cell: &str) -> RawValue {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return RawValue::Null;
        }
        if let Ok(int_val) = trimmed.parse::<i64>() {
            return RawValue::Integer(int_val);
        }
        if let Ok(float_val) = trimmed.parse::<f64>() {
            return RawValue::Float(float_val);
        }
        RawValue::Text(trimmed.to_string())
    }
}

impl Default for RawValue {
    fn default() -> Self {
        RawValue::Null
    }
}

/// One raw movie row: every input column held in its boundary shape.
///
/// Construction is by field; the CSV reader fills one per data row, and
/// callers embedding the library build them directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    pub title: Option<String>,
    pub rating: RawValue,
    pub votes: RawValue,
    pub runtime: RawValue,
    pub year: RawValue,
    pub certificate: RawValue,
    pub genres: RawValue,
    pub directors: RawValue,
    pub cast: RawValue,
    pub plot: RawValue,
    pub countries: RawValue,
    pub languages: RawValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_types() {
        assert_eq!(RawValue::infer(""), RawValue::Null);
        assert_eq!(RawValue::infer("   "), RawValue::Null);
        assert_eq!(RawValue::infer("2024"), RawValue::Integer(2024));
        assert!(matches!(RawValue::infer("7.9"), RawValue::Float(_)));
        assert_eq!(
            RawValue::infer("Drama, Crime"),
            RawValue::Text("Drama, Crime".to_string())
        );
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(RawValue::Integer(125).as_f64(), Some(125.0));
        assert_eq!(RawValue::Float(7.9).as_f64(), Some(7.9));
        assert_eq!(RawValue::Text("7.9".to_string()).as_f64(), None);
        assert_eq!(RawValue::Null.as_f64(), None);
    }

    #[test]
    fn test_as_text_lossy() {
        assert_eq!(
            RawValue::Integer(2001).as_text_lossy(),
            Some("2001".to_string())
        );
        assert_eq!(RawValue::Null.as_text_lossy(), None);
        assert_eq!(
            RawValue::List(vec!["Drama".to_string()]).as_text_lossy(),
            None
        );
    }
}
