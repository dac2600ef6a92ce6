//! Supervised classification of content ratings.
//!
//! Drives the end of the pipeline: drop unlabeled records, fit the feature
//! encoders over the full labeled corpus, split deterministically, train
//! the forest on the training partition only, and evaluate per class on the
//! held-out rows.

pub mod forest;
pub mod metrics;
pub mod split;
pub mod tree;

pub use forest::RandomForestClassifier;
pub use metrics::{ClassMetrics, ClassificationReport, classification_report};
pub use split::train_test_split;
pub use tree::DecisionTree;

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use crate::error::{CinelabError, Result};
use crate::features::FeatureBuilder;
use crate::normalize::filter::drop_unlabeled;
use crate::record::MovieRecord;

/// Outcome of a full classification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationOutcome {
    /// Per-class metrics on the held-out partition.
    pub report: ClassificationReport,
    /// Records dropped for lacking a resolvable label.
    pub dropped_unlabeled: usize,
    pub train_rows: usize,
    pub test_rows: usize,
}

impl std::fmt::Display for ClassificationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} train rows, {} test rows, {} unlabeled record(s) dropped",
            self.train_rows, self.test_rows, self.dropped_unlabeled
        )?;
        writeln!(f)?;
        write!(f, "{}", self.report)
    }
}

/// Run the classifier pipeline over normalized records.
///
/// Feature-vocabulary fitting covers the full labeled corpus and is
/// independent of the split seed; the model itself sees only training rows.
pub fn run_classification(
    records: Vec<MovieRecord>,
    config: &PipelineConfig,
) -> Result<ClassificationOutcome> {
    config.validate().map_err(CinelabError::invalid_argument)?;

    // Label completeness check, on the canonical label, immediately before
    // feature extraction.
    let (labeled, dropped_unlabeled) = drop_unlabeled(records);
    info!(
        "{} labeled records ({} dropped as unlabeled)",
        labeled.len(),
        dropped_unlabeled
    );

    let builder = FeatureBuilder::fit(&labeled, config.max_features)?;
    let (matrix, labels) = builder.build(&labeled)?;

    let (train_indices, test_indices) =
        train_test_split(matrix.rows(), config.test_ratio, config.seed);
    info!(
        "split {} rows into {} train / {} test (seed {})",
        matrix.rows(),
        train_indices.len(),
        test_indices.len(),
        config.seed
    );

    let mut model = RandomForestClassifier::new(
        config.n_trees,
        config.max_depth,
        config.min_samples_split,
        config.seed,
    );
    model.fit(&matrix, &labels, &train_indices)?;

    let y_true: Vec<usize> = test_indices.iter().map(|&i| labels[i]).collect();
    let y_pred = model.predict_rows(&matrix, &test_indices)?;
    let report = classification_report(&y_true, &y_pred, builder.labels());

    Ok(ClassificationOutcome {
        report,
        dropped_unlabeled,
        train_rows: train_indices.len(),
        test_rows: test_indices.len(),
    })
}
