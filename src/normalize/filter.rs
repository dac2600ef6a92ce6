//! Record filtering: mean imputation and completeness enforcement.
//!
//! Numeric gaps are filled with column means computed once over every record
//! with a present value, *before* any record is dropped, so the means are
//! insensitive to how much this same stage later filters out. Records
//! missing a required free-text or multi-valued attribute are dropped whole;
//! no partial record flows downstream.

use crate::record::{MovieRecord, RawRecord};

/// Column means for the numeric attributes, computed over present values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnMeans {
    pub rating: f64,
    pub votes: f64,
    pub runtime: f64,
}

/// Compute the numeric column means over all records with a present value.
///
/// Must run before any filtering. A column with no present values at all
/// falls back to a zero mean.
pub fn column_means(records: &[RawRecord]) -> ColumnMeans {
    let mut sums = [0.0f64; 3];
    let mut counts = [0usize; 3];

    for record in records {
        for (slot, value) in [
            (0, record.rating.as_f64()),
            (1, record.votes.as_f64()),
            (2, record.runtime.as_f64()),
        ] {
            if let Some(v) = value {
                sums[slot] += v;
                counts[slot] += 1;
            }
        }
    }

    let mean = |slot: usize| {
        if counts[slot] > 0 {
            sums[slot] / counts[slot] as f64
        } else {
            0.0
        }
    };

    ColumnMeans {
        rating: mean(0),
        votes: mean(1),
        runtime: mean(2),
    }
}

impl ColumnMeans {
    /// Impute a possibly-missing numeric value with the column mean.
    pub fn impute(present: Option<f64>, mean: f64) -> f64 {
        present.unwrap_or(mean)
    }
}

/// Check the completeness invariant on a normalized record.
///
/// Returns the name of the first missing required attribute, or `None` when
/// the record is complete. Required attributes are the free-text plot and
/// every multi-valued field; blank or whitespace-only values count as
/// missing.
pub fn missing_required_field(record: &MovieRecord) -> Option<&'static str> {
    if record.plot.trim().is_empty() {
        return Some("plot");
    }
    for (name, values) in [
        ("genres", &record.genres),
        ("directors", &record.directors),
        ("cast", &record.cast),
        ("countries", &record.countries),
        ("languages", &record.languages),
    ] {
        if values.is_empty() {
            return Some(name);
        }
    }
    None
}

/// Drop records without a resolvable content-rating label.
///
/// Runs as a separate pass immediately before feature extraction, checking
/// the *canonical* label, never the raw one. Returns the surviving records
/// and the number dropped.
pub fn drop_unlabeled(records: Vec<MovieRecord>) -> (Vec<MovieRecord>, usize) {
    let before = records.len();
    let kept: Vec<MovieRecord> = records
        .into_iter()
        .filter(MovieRecord::has_certificate)
        .collect();
    let dropped = before - kept.len();
    (kept, dropped)
}
