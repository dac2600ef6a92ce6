//! Multi-hot encoding for multi-valued categorical fields.

use ahash::AHashMap;

use crate::error::{CinelabError, Result};

/// Multi-hot encoder over a categorical vocabulary.
///
/// One column per distinct value observed in the fitting corpus, columns in
/// sorted order so fitting is deterministic. Fit once, reused verbatim for
/// any later encoding.
#[derive(Debug, Clone, Default)]
pub struct MultiHotEncoder {
    /// Column values in column order.
    classes: Vec<String>,
    /// Value → column index.
    index: AHashMap<String, usize>,
}

impl MultiHotEncoder {
    /// Create an unfitted encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit the vocabulary over the value sequences of the corpus.
    pub fn fit<'a, I>(&mut self, sequences: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut classes: Vec<String> = Vec::new();
        let mut index = AHashMap::new();
        for sequence in sequences {
            for value in sequence {
                if !index.contains_key(value) {
                    index.insert(value.clone(), 0);
                    classes.push(value.clone());
                }
            }
        }
        if classes.is_empty() {
            return Err(CinelabError::feature(
                "cannot fit a multi-hot encoder on an empty vocabulary",
            ));
        }
        classes.sort();
        for (idx, value) in classes.iter().enumerate() {
            index.insert(value.clone(), idx);
        }
        self.classes = classes;
        self.index = index;
        Ok(())
    }

    /// Encode one value sequence as a 0/1 row.
    ///
    /// Values outside the fitted vocabulary are ignored.
    pub fn transform(&self, values: &[String]) -> Vec<f64> {
        let mut row = vec![0.0; self.classes.len()];
        for value in values {
            if let Some(&idx) = self.index.get(value) {
                row[idx] = 1.0;
            }
        }
        row
    }

    /// Number of columns in the encoding.
    pub fn width(&self) -> usize {
        self.classes.len()
    }

    /// The fitted vocabulary, in column order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}
