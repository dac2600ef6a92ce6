//! Command line argument parsing for the Cinelab CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::PipelineConfig;

/// Cinelab - movie dataset normalization and content-rating classification
#[derive(Parser, Debug, Clone)]
#[command(name = "cinelab")]
#[command(about = "Normalize a movie dataset and classify content ratings")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CinelabArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CinelabArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Normalize a raw dataset and optionally persist it
    Normalize(NormalizeArgs),

    /// Print descriptive statistics over the normalized dataset
    Stats(StatsArgs),

    /// Train and evaluate the content-rating classifier
    Classify(ClassifyArgs),
}

/// Arguments for dataset normalization
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Input CSV file
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Write the normalized dataset to this CSV file
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for descriptive statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Input CSV file
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Number of entries in each top-N ranking
    #[arg(long, default_value = "10")]
    pub top: usize,
}

/// Arguments for classification
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Input CSV file
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Also write the normalized dataset to this CSV file
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Random seed for the train/test split and the forest
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Fraction of rows held out for evaluation
    #[arg(long, default_value = "0.2")]
    pub test_ratio: f64,

    /// Number of trees in the ensemble
    #[arg(long, default_value = "100")]
    pub trees: usize,

    /// Maximum TF-IDF vocabulary size
    #[arg(long, default_value = "1000")]
    pub max_features: usize,

    /// Maximum tree depth
    #[arg(long, default_value = "12")]
    pub max_depth: usize,

    /// Minimum samples required to split a tree node
    #[arg(long, default_value = "2")]
    pub min_samples_split: usize,
}

impl ClassifyArgs {
    /// Build the pipeline configuration from the flags.
    pub fn to_config(&self) -> PipelineConfig {
        PipelineConfig {
            seed: self.seed,
            test_ratio: self.test_ratio,
            max_features: self.max_features,
            n_trees: self.trees,
            max_depth: self.max_depth,
            min_samples_split: self.min_samples_split,
        }
    }
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let mut args = CinelabArgs::parse_from(["cinelab", "stats", "movies.csv"]);
        assert_eq!(args.verbosity(), 1);

        args.verbose = 2;
        assert_eq!(args.verbosity(), 2);

        args.quiet = true;
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_classify_defaults_match_pipeline_config() {
        let args = CinelabArgs::parse_from(["cinelab", "classify", "movies.csv"]);
        let Command::Classify(classify) = args.command else {
            panic!("expected classify subcommand");
        };
        let config = classify.to_config();
        let defaults = PipelineConfig::default();
        assert_eq!(config.seed, defaults.seed);
        assert_eq!(config.test_ratio, defaults.test_ratio);
        assert_eq!(config.max_features, defaults.max_features);
        assert_eq!(config.n_trees, defaults.n_trees);
    }

    #[test]
    fn test_classify_flags_override() {
        let args = CinelabArgs::parse_from([
            "cinelab", "classify", "movies.csv", "--seed", "7", "--trees", "25",
        ]);
        let Command::Classify(classify) = args.command else {
            panic!("expected classify subcommand");
        };
        assert_eq!(classify.seed, 7);
        assert_eq!(classify.trees, 25);
    }
}
