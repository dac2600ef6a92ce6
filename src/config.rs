//! Pipeline configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the full normalization and classification pipeline.
///
/// Defaults reproduce the reference run: an 80/20 split with seed 42, a
/// 1000-term plot vocabulary, and a 100-tree forest. The same seed always
/// produces the same split and therefore the same metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Seed for the train/test split and the forest's bootstrap sampling.
    pub seed: u64,
    /// Fraction of rows held out for evaluation.
    pub test_ratio: f64,
    /// Maximum size of the TF-IDF vocabulary.
    pub max_features: usize,
    /// Number of trees in the ensemble.
    pub n_trees: usize,
    /// Maximum depth of each tree.
    pub max_depth: usize,
    /// Minimum samples required to split a tree node.
    pub min_samples_split: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            test_ratio: 0.2,
            max_features: 1000,
            n_trees: 100,
            max_depth: 12,
            min_samples_split: 2,
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration, returning a message for the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..1.0).contains(&self.test_ratio) || self.test_ratio == 0.0 {
            return Err(format!(
                "test_ratio must be in (0, 1), got {}",
                self.test_ratio
            ));
        }
        if self.max_features == 0 {
            return Err("max_features must be at least 1".to_string());
        }
        if self.n_trees == 0 {
            return Err("n_trees must be at least 1".to_string());
        }
        if self.max_depth == 0 {
            return Err("max_depth must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = PipelineConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.test_ratio, 0.2);
        assert_eq!(config.max_features, 1000);
        assert_eq!(config.n_trees, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = PipelineConfig::default();
        config.test_ratio = 1.5;
        assert!(config.validate().is_err());

        let mut config = PipelineConfig::default();
        config.n_trees = 0;
        assert!(config.validate().is_err());
    }
}
