//! Bagged decision-tree ensemble.

use chrono::{DateTime, Utc};
use log::info;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{CinelabError, Result};
use crate::features::FeatureMatrix;

use super::tree::{DecisionTree, TreeParams};

/// Minimum number of training rows required to fit the ensemble.
const MIN_TRAINING_ROWS: usize = 10;

/// Training statistics for a fitted forest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Training timestamp.
    pub trained_at: DateTime<Utc>,
    /// Number of training rows used.
    pub training_examples: usize,
    /// Training time in milliseconds.
    pub training_time_ms: u64,
    /// Number of trees grown.
    pub trees: usize,
}

/// A random forest classifier: a fixed-size ensemble of gini-split trees,
/// each trained on a bootstrap sample of the training partition with √d
/// feature subsampling per split, predicting by majority vote.
///
/// All randomness (bootstrap draws and feature subsets) flows from a single
/// seeded RNG, so the same seed and training data always produce the same
/// ensemble.
pub struct RandomForestClassifier {
    trees: Vec<DecisionTree>,
    n_trees: usize,
    max_depth: usize,
    min_samples_split: usize,
    seed: u64,
    n_classes: usize,
    training_stats: Option<TrainingStats>,
}

impl std::fmt::Debug for RandomForestClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomForestClassifier")
            .field("n_trees", &self.n_trees)
            .field("max_depth", &self.max_depth)
            .field("trained", &self.is_trained())
            .finish()
    }
}

impl RandomForestClassifier {
    /// Create a new untrained forest.
    pub fn new(n_trees: usize, max_depth: usize, min_samples_split: usize, seed: u64) -> Self {
        Self {
            trees: Vec::new(),
            n_trees,
            max_depth,
            min_samples_split,
            seed,
            n_classes: 0,
            training_stats: None,
        }
    }

    /// Train the ensemble on the rows named by `train_indices`.
    ///
    /// The label vector spans the whole matrix; only the training rows are
    /// ever read here, so test rows cannot influence the fit.
    pub fn fit(
        &mut self,
        matrix: &FeatureMatrix,
        labels: &[usize],
        train_indices: &[usize],
    ) -> Result<()> {
        if train_indices.len() < MIN_TRAINING_ROWS {
            return Err(CinelabError::training(format!(
                "need at least {MIN_TRAINING_ROWS} training rows, got {}",
                train_indices.len()
            )));
        }
        let start_time = std::time::Instant::now();

        self.n_classes = labels.iter().copied().max().map(|m| m + 1).unwrap_or(0);
        let params = TreeParams {
            max_depth: self.max_depth,
            min_samples_split: self.min_samples_split,
            n_classes: self.n_classes,
            feature_candidates: ((matrix.cols() as f64).sqrt().ceil() as usize).max(1),
        };

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut trees = Vec::with_capacity(self.n_trees);
        for _ in 0..self.n_trees {
            let bootstrap: Vec<usize> = (0..train_indices.len())
                .map(|_| train_indices[rng.random_range(0..train_indices.len())])
                .collect();
            trees.push(DecisionTree::fit(
                matrix, labels, &bootstrap, &params, &mut rng,
            )?);
        }
        self.trees = trees;

        let training_time = start_time.elapsed();
        self.training_stats = Some(TrainingStats {
            trained_at: Utc::now(),
            training_examples: train_indices.len(),
            training_time_ms: training_time.as_millis() as u64,
            trees: self.trees.len(),
        });
        info!(
            "trained {} trees on {} rows in {} ms",
            self.trees.len(),
            train_indices.len(),
            training_time.as_millis()
        );
        Ok(())
    }

    /// Predict the class for one feature row by majority vote.
    pub fn predict(&self, row: &[f64]) -> Result<usize> {
        if self.trees.is_empty() {
            return Err(CinelabError::training("model is not trained"));
        }
        let mut votes = vec![0usize; self.n_classes];
        for tree in &self.trees {
            let class = tree.predict(row);
            if class < votes.len() {
                votes[class] += 1;
            }
        }
        // Ties resolve to the lowest class code.
        let mut best = 0;
        for (class, &count) in votes.iter().enumerate() {
            if count > votes[best] {
                best = class;
            }
        }
        Ok(best)
    }

    /// Predict classes for the rows named by `indices`.
    pub fn predict_rows(&self, matrix: &FeatureMatrix, indices: &[usize]) -> Result<Vec<usize>> {
        indices
            .iter()
            .map(|&i| self.predict(matrix.row(i)))
            .collect()
    }

    /// Check if the model is trained.
    pub fn is_trained(&self) -> bool {
        !self.trees.is_empty()
    }

    /// Training statistics, when fitted.
    pub fn training_stats(&self) -> Option<&TrainingStats> {
        self.training_stats.as_ref()
    }
}
