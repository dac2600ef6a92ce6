//! Field normalization pipeline.
//!
//! Turns raw ingestion-boundary records into normalized [`MovieRecord`]s by
//! composing pure stage functions in a fixed order:
//!
//! ```text
//! RawRecord → list fields → numeric imputation + derived fields
//!           → label canonicalization → completeness filter → plot sanitization
//! ```
//!
//! Each stage either produces a new value or rejects the record with a
//! record-level error; rejected records are dropped and tallied in the
//! [`NormalizeSummary`], never fatal to the batch. Stage functions are pure,
//! so each is unit-testable in isolation and the composition has no
//! order-of-mutation hazards.

pub mod filter;
pub mod list_field;
pub mod rating;
pub mod runtime;
pub mod votes;

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{CinelabError, Result};
use crate::record::{MovieRecord, RawRecord};
use crate::text::sanitizer::sanitize;

use filter::{ColumnMeans, column_means, missing_required_field};
use list_field::parse_list_field;
use rating::{canonicalize_rating, is_canonical};
use runtime::{format_runtime, parse_runtime};
use votes::format_votes;

/// Aggregate outcome of a normalization run.
///
/// Unresolved content-rating labels are surfaced here as an "other" bucket
/// (label → occurrence count) rather than per-record errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizeSummary {
    /// Number of raw records fed in.
    pub input_records: usize,
    /// Number of records surviving normalization.
    pub kept_records: usize,
    /// Records excluded because a multi-valued field could not be parsed.
    pub dropped_malformed: usize,
    /// Records dropped because a required field was missing or blank.
    pub dropped_incomplete: usize,
    /// Labels that matched no canonicalization rule, with occurrence counts.
    pub unresolved_labels: BTreeMap<String, usize>,
}

impl NormalizeSummary {
    /// Total records dropped by per-record recovery.
    pub fn dropped(&self) -> usize {
        self.dropped_malformed + self.dropped_incomplete
    }
}

impl std::fmt::Display for NormalizeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "input records:      {}", self.input_records)?;
        writeln!(f, "kept:               {}", self.kept_records)?;
        writeln!(f, "dropped malformed:  {}", self.dropped_malformed)?;
        writeln!(f, "dropped incomplete: {}", self.dropped_incomplete)?;
        if self.unresolved_labels.is_empty() {
            write!(f, "unresolved labels:  none")
        } else {
            write!(f, "unresolved labels: ")?;
            for (label, count) in &self.unresolved_labels {
                write!(f, " {label} ({count})")?;
            }
            Ok(())
        }
    }
}

/// The field normalizer.
///
/// Stateless; hand [`Normalizer::normalize`] the whole raw batch so the
/// imputation means can be computed up front.
#[derive(Debug, Clone, Default)]
pub struct Normalizer;

impl Normalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        Normalizer
    }

    /// Normalize a batch of raw records.
    ///
    /// Column means are computed once over the full batch before any record
    /// is considered for dropping, so imputation is insensitive to what this
    /// stage filters out.
    pub fn normalize(&self, raw: &[RawRecord]) -> (Vec<MovieRecord>, NormalizeSummary) {
        let means = column_means(raw);
        let mut summary = NormalizeSummary {
            input_records: raw.len(),
            ..NormalizeSummary::default()
        };
        let mut records = Vec::with_capacity(raw.len());

        for raw_record in raw {
            match normalize_record(raw_record, &means) {
                Ok(record) => {
                    // Unlabeled records stay in the normalized dataset; the
                    // classifier pipeline drops them in a later pass.
                    if record.has_certificate() && !is_canonical(&record.certificate) {
                        *summary
                            .unresolved_labels
                            .entry(record.certificate.clone())
                            .or_insert(0) += 1;
                    }
                    records.push(record);
                }
                Err(CinelabError::MalformedRecord(msg)) => {
                    debug!("excluding malformed record: {msg}");
                    summary.dropped_malformed += 1;
                }
                Err(CinelabError::IncompleteRecord(msg)) => {
                    debug!("dropping incomplete record: {msg}");
                    summary.dropped_incomplete += 1;
                }
                // Stage functions only produce record-level errors.
                Err(other) => {
                    debug!("dropping record on unexpected error: {other}");
                    summary.dropped_malformed += 1;
                }
            }
        }

        summary.kept_records = records.len();
        if !summary.unresolved_labels.is_empty() {
            let total: usize = summary.unresolved_labels.values().sum();
            warn!(
                "{} record(s) carry {} content-rating label(s) outside the canonical vocabulary: {:?}",
                total,
                summary.unresolved_labels.len(),
                summary.unresolved_labels.keys().collect::<Vec<_>>()
            );
        }
        (records, summary)
    }
}

/// Normalize a single raw record through every stage.
///
/// Pure function of the record and the pre-computed column means.
fn normalize_record(raw: &RawRecord, means: &ColumnMeans) -> Result<MovieRecord> {
    // Stage 1: multi-valued fields into canonical sequences.
    let genres = parse_list_field(&raw.genres)?;
    let directors = parse_list_field(&raw.directors)?;
    let cast = parse_list_field(&raw.cast)?;
    let countries = parse_list_field(&raw.countries)?;
    let languages = parse_list_field(&raw.languages)?;
    let plot_raw = raw.plot.as_text_lossy().unwrap_or_default();

    // Stage 2: numeric imputation and derived fields.
    let rating = ColumnMeans::impute(raw.rating.as_f64(), means.rating);
    let votes_numeric = ColumnMeans::impute(raw.votes.as_f64(), means.votes);
    let runtime_raw = ColumnMeans::impute(raw.runtime.as_f64(), means.runtime);
    let runtime_display = format_runtime(runtime_raw);
    // The numeric companion is re-derived from the display string once, so
    // the two are exact inverses of each other from here on.
    let runtime_minutes = parse_runtime(&runtime_display)?;
    let year = raw.year.as_f64().map(|y| y as i32);
    let decade = year.map(|y| (y / 10) * 10);

    // Stage 3: content-rating canonicalization.
    let certificate = match raw.certificate.as_text_lossy() {
        Some(label) => canonicalize_rating(&label),
        None => String::new(),
    };

    let record = MovieRecord {
        title: raw.title.clone(),
        rating,
        votes: votes_numeric,
        votes_display: format_votes(votes_numeric),
        runtime_minutes,
        runtime_display,
        year,
        decade,
        certificate,
        genres,
        directors,
        cast,
        // Stage 5 below sanitizes this; keep the raw text for the
        // completeness check first.
        plot: plot_raw,
        countries,
        languages,
    };

    // Stage 4: completeness filter.
    if let Some(field) = missing_required_field(&record) {
        return Err(CinelabError::incomplete(format!(
            "required field {field:?} is missing or blank"
        )));
    }

    // Stage 5: plot sanitization.
    Ok(MovieRecord {
        plot: sanitize(&record.plot),
        ..record
    })
}
