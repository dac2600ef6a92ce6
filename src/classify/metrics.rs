//! Per-class evaluation metrics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::features::LabelEncoder;

/// Metrics for one content-rating class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// Canonical human-readable label.
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of true instances in the test partition.
    pub support: usize,
}

/// A per-class metrics report over the held-out partition.
///
/// Only classes actually present in the test partition appear; with a
/// stratified-by-nothing split a rare class can miss the partition
/// entirely, and its absence here is expected behavior, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub classes: Vec<ClassMetrics>,
    /// Overall fraction of correct predictions.
    pub accuracy: f64,
    /// Number of test rows evaluated.
    pub test_rows: usize,
}

/// Compute per-class precision, recall, F1, and support.
///
/// `y_true` and `y_pred` are parallel code vectors over the test partition;
/// codes are decoded through the retained label mapping for reporting.
pub fn classification_report(
    y_true: &[usize],
    y_pred: &[usize],
    encoder: &LabelEncoder,
) -> ClassificationReport {
    debug_assert_eq!(y_true.len(), y_pred.len());

    let mut present: Vec<usize> = y_true.to_vec();
    present.sort();
    present.dedup();

    let mut classes = Vec::with_capacity(present.len());
    for &class in &present {
        let support = y_true.iter().filter(|&&t| t == class).count();
        let predicted = y_pred.iter().filter(|&&p| p == class).count();
        let true_positives = y_true
            .iter()
            .zip(y_pred)
            .filter(|&(&t, &p)| t == class && p == class)
            .count();

        let precision = ratio(true_positives, predicted);
        let recall = ratio(true_positives, support);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        let label = encoder
            .decode(class)
            .unwrap_or("<unknown>")
            .to_string();
        classes.push(ClassMetrics {
            label,
            precision,
            recall,
            f1,
            support,
        });
    }

    let correct = y_true.iter().zip(y_pred).filter(|&(t, p)| t == p).count();
    ClassificationReport {
        classes,
        accuracy: ratio(correct, y_true.len()),
        test_rows: y_true.len(),
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .classes
            .iter()
            .map(|c| c.label.len())
            .chain(std::iter::once("accuracy".len()))
            .max()
            .unwrap_or(8);

        writeln!(
            f,
            "{:>label_width$}  {:>9}  {:>9}  {:>9}  {:>8}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for class in &self.classes {
            writeln!(
                f,
                "{:>label_width$}  {:>9.2}  {:>9.2}  {:>9.2}  {:>8}",
                class.label, class.precision, class.recall, class.f1, class.support
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>label_width$}  {:>9}  {:>9}  {:>9.2}  {:>8}",
            "accuracy", "", "", self.accuracy, self.test_rows
        )
    }
}
