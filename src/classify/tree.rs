//! Decision tree classifier.
//!
//! A single gini-split decision tree over feature-matrix rows. Trees are
//! grown greedily: at each node a random subset of feature columns is
//! examined, every midpoint between distinct sorted values is tried as a
//! threshold, and the split with the largest impurity reduction wins.

use rand::rngs::StdRng;

use crate::error::{CinelabError, Result};
use crate::features::FeatureMatrix;

/// Growth parameters for one tree.
#[derive(Debug, Clone, Copy)]
pub struct TreeParams {
    /// Maximum tree depth.
    pub max_depth: usize,
    /// Minimum samples required to split a node.
    pub min_samples_split: usize,
    /// Number of distinct classes in the label vector.
    pub n_classes: usize,
    /// Feature columns sampled per split (√d for a forest).
    pub feature_candidates: usize,
}

/// A fitted decision tree.
#[derive(Debug, Clone, Default)]
pub struct DecisionTree {
    root: Option<Box<TreeNode>>,
}

#[derive(Debug, Clone)]
struct TreeNode {
    /// Feature index for the split (-1 for a leaf).
    feature_idx: i32,
    /// Threshold value for the split.
    threshold: f64,
    /// Predicted class (for leaf nodes).
    class: usize,
    /// Left child (feature value <= threshold).
    left: Option<Box<TreeNode>>,
    /// Right child.
    right: Option<Box<TreeNode>>,
}

impl DecisionTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Fit the tree on the rows named by `indices`.
    pub fn fit(
        matrix: &FeatureMatrix,
        labels: &[usize],
        indices: &[usize],
        params: &TreeParams,
        rng: &mut StdRng,
    ) -> Result<Self> {
        if labels.len() != matrix.rows() {
            return Err(CinelabError::training(
                "label vector and feature matrix row counts differ",
            ));
        }
        if indices.is_empty() {
            return Err(CinelabError::training("cannot fit a tree on zero rows"));
        }
        let root = build_tree(matrix, labels, indices, 0, params, rng);
        Ok(Self { root: Some(root) })
    }

    /// Predict the class for one feature row.
    pub fn predict(&self, row: &[f64]) -> usize {
        match &self.root {
            Some(root) => predict_node(root, row),
            None => 0,
        }
    }

    /// Check if the tree has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.root.is_some()
    }
}

/// Recursively grow the tree.
fn build_tree(
    matrix: &FeatureMatrix,
    labels: &[usize],
    indices: &[usize],
    depth: usize,
    params: &TreeParams,
    rng: &mut StdRng,
) -> Box<TreeNode> {
    let counts = class_counts(labels, indices, params.n_classes);
    let majority = argmax(&counts);

    let pure = counts.iter().filter(|&&c| c > 0).count() <= 1;
    if pure || depth >= params.max_depth || indices.len() < params.min_samples_split {
        return leaf(majority);
    }

    match find_best_split(matrix, labels, indices, &counts, params, rng) {
        Some((feature_idx, threshold)) => {
            let (left_indices, right_indices): (Vec<usize>, Vec<usize>) = indices
                .iter()
                .copied()
                .partition(|&i| matrix.get(i, feature_idx) <= threshold);
            if left_indices.is_empty() || right_indices.is_empty() {
                return leaf(majority);
            }

            let left = build_tree(matrix, labels, &left_indices, depth + 1, params, rng);
            let right = build_tree(matrix, labels, &right_indices, depth + 1, params, rng);
            Box::new(TreeNode {
                feature_idx: feature_idx as i32,
                threshold,
                class: majority,
                left: Some(left),
                right: Some(right),
            })
        }
        // No candidate feature separates the node.
        None => leaf(majority),
    }
}

/// Find the (feature, threshold) pair with the best gini gain among a
/// random subset of feature columns, or `None` when nothing separates.
fn find_best_split(
    matrix: &FeatureMatrix,
    labels: &[usize],
    indices: &[usize],
    parent_counts: &[usize],
    params: &TreeParams,
    rng: &mut StdRng,
) -> Option<(usize, f64)> {
    let n = indices.len() as f64;
    let parent_gini = gini(parent_counts, indices.len());

    let candidates =
        rand::seq::index::sample(rng, matrix.cols(), params.feature_candidates.min(matrix.cols()));

    let mut best_gain = 0.0;
    let mut best_split: Option<(usize, f64)> = None;

    for feature_idx in candidates {
        let mut values: Vec<(f64, usize)> = indices
            .iter()
            .map(|&i| (matrix.get(i, feature_idx), labels[i]))
            .collect();
        values.sort_by(|a, b| a.0.total_cmp(&b.0));

        // Sweep left-to-right, moving one sample at a time into the left
        // partition and scoring the boundary between distinct values.
        let mut left_counts = vec![0usize; params.n_classes];
        let mut right_counts = parent_counts.to_vec();

        for i in 1..values.len() {
            let (value, label) = values[i - 1];
            left_counts[label] += 1;
            right_counts[label] -= 1;

            if value == values[i].0 {
                continue;
            }
            let threshold = (value + values[i].0) / 2.0;

            let n_left = i;
            let n_right = values.len() - i;
            let weighted = (n_left as f64 * gini(&left_counts, n_left)
                + n_right as f64 * gini(&right_counts, n_right))
                / n;
            let gain = parent_gini - weighted;

            if gain > best_gain {
                best_gain = gain;
                best_split = Some((feature_idx, threshold));
            }
        }
    }

    best_split
}

/// Gini impurity of a class-count vector over `total` samples.
fn gini(counts: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    1.0 - counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total;
            p * p
        })
        .sum::<f64>()
}

fn class_counts(labels: &[usize], indices: &[usize], n_classes: usize) -> Vec<usize> {
    let mut counts = vec![0usize; n_classes];
    for &i in indices {
        counts[labels[i]] += 1;
    }
    counts
}

/// Index of the largest count; ties resolve to the lowest class code.
fn argmax(counts: &[usize]) -> usize {
    let mut best = 0;
    for (idx, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = idx;
        }
    }
    best
}

fn leaf(class: usize) -> Box<TreeNode> {
    Box::new(TreeNode {
        feature_idx: -1,
        threshold: 0.0,
        class,
        left: None,
        right: None,
    })
}

fn predict_node(node: &TreeNode, row: &[f64]) -> usize {
    if node.feature_idx < 0 {
        return node.class;
    }
    let value = row.get(node.feature_idx as usize).copied().unwrap_or(0.0);
    if value <= node.threshold {
        match &node.left {
            Some(left) => predict_node(left, row),
            None => node.class,
        }
    } else {
        match &node.right {
            Some(right) => predict_node(right, row),
            None => node.class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn separable_matrix() -> (FeatureMatrix, Vec<usize>) {
        // Two columns; class is decided entirely by the first.
        let text: Vec<Vec<f64>> = (0..20)
            .map(|i| vec![if i < 10 { 0.1 } else { 0.9 }])
            .collect();
        let genres: Vec<Vec<f64>> = (0..20).map(|_| vec![1.0]).collect();
        let labels: Vec<usize> = (0..20).map(|i| usize::from(i >= 10)).collect();
        (FeatureMatrix::from_blocks(text, genres), labels)
    }

    fn params(n_classes: usize, cols: usize) -> TreeParams {
        TreeParams {
            max_depth: 8,
            min_samples_split: 2,
            n_classes,
            feature_candidates: cols,
        }
    }

    #[test]
    fn test_fits_a_separable_problem() {
        let (matrix, labels) = separable_matrix();
        let indices: Vec<usize> = (0..matrix.rows()).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let tree =
            DecisionTree::fit(&matrix, &labels, &indices, &params(2, matrix.cols()), &mut rng)
                .unwrap();

        assert!(tree.is_fitted());
        assert_eq!(tree.predict(&[0.1, 1.0]), 0);
        assert_eq!(tree.predict(&[0.9, 1.0]), 1);
    }

    #[test]
    fn test_pure_node_is_a_leaf() {
        let text: Vec<Vec<f64>> = (0..5).map(|i| vec![i as f64]).collect();
        let genres: Vec<Vec<f64>> = (0..5).map(|_| vec![0.0]).collect();
        let matrix = FeatureMatrix::from_blocks(text, genres);
        let labels = vec![1usize; 5];
        let indices: Vec<usize> = (0..5).collect();
        let mut rng = StdRng::seed_from_u64(1);

        let tree =
            DecisionTree::fit(&matrix, &labels, &indices, &params(2, matrix.cols()), &mut rng)
                .unwrap();
        // Every prediction is the single observed class.
        assert_eq!(tree.predict(&[3.0, 0.0]), 1);
        assert_eq!(tree.predict(&[100.0, 0.0]), 1);
    }

    #[test]
    fn test_unfitted_tree_predicts_class_zero() {
        let tree = DecisionTree::new();
        assert!(!tree.is_fitted());
        assert_eq!(tree.predict(&[1.0]), 0);
    }

    #[test]
    fn test_gini() {
        assert_eq!(gini(&[10, 0], 10), 0.0);
        assert!((gini(&[5, 5], 10) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_mismatched_labels_error() {
        let (matrix, _) = separable_matrix();
        let labels = vec![0usize; 3];
        let indices = vec![0, 1];
        let mut rng = StdRng::seed_from_u64(1);
        assert!(
            DecisionTree::fit(&matrix, &labels, &indices, &params(2, matrix.cols()), &mut rng)
                .is_err()
        );
    }
}
