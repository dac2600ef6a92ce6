//! Label encoding for the content-rating target.

use ahash::{AHashMap, AHashSet};

use crate::error::{CinelabError, Result};

/// Maps canonical content-rating labels to small integer codes.
///
/// The enumeration covers the labels actually observed in the data (not the
/// full theoretical vocabulary), sorted so codes are deterministic. The
/// code ↔ label mapping is retained for reporting.
#[derive(Debug, Clone, Default)]
pub struct LabelEncoder {
    classes: Vec<String>,
    index: AHashMap<String, usize>,
}

impl LabelEncoder {
    /// Create an unfitted encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit the encoder on the observed labels.
    pub fn fit<'a, I>(&mut self, labels: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut classes: Vec<String> = Vec::new();
        let mut seen: AHashSet<String> = AHashSet::new();
        for label in labels {
            if seen.insert(label.to_string()) {
                classes.push(label.to_string());
            }
        }
        if classes.is_empty() {
            return Err(CinelabError::feature("no labels observed"));
        }
        classes.sort();
        let index = classes
            .iter()
            .enumerate()
            .map(|(idx, label)| (label.clone(), idx))
            .collect();
        self.classes = classes;
        self.index = index;
        Ok(())
    }

    /// Encode a label into its integer code.
    pub fn encode(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Decode an integer code back into its label.
    pub fn decode(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(|s| s.as_str())
    }

    /// Number of distinct classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True when no labels have been fitted.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The observed labels in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}
