//! Deterministic train/test splitting.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Split `n_rows` row indices into shuffled train and test partitions.
///
/// The shuffle is driven by `StdRng::seed_from_u64(seed)`, so the same seed
/// always produces the same partitions (and therefore the same downstream
/// metrics). The split is stratified by nothing: class balance in the test
/// partition is whatever the shuffle yields, and a class can legitimately
/// end up absent from it.
pub fn train_test_split(n_rows: usize, test_ratio: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n_rows).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let mut test_len = (n_rows as f64 * test_ratio).ceil() as usize;
    // Keep both partitions non-empty whenever there are at least two rows.
    if test_len >= n_rows && n_rows > 1 {
        test_len = n_rows - 1;
    }

    let test = indices.split_off(n_rows - test_len);
    (indices, test)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sizes() {
        let (train, test) = train_test_split(100, 0.2, 42);
        assert_eq!(train.len(), 80);
        assert_eq!(test.len(), 20);
    }

    #[test]
    fn test_partitions_cover_all_rows_once() {
        let (mut train, mut test) = train_test_split(50, 0.2, 7);
        train.append(&mut test);
        train.sort();
        assert_eq!(train, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_split() {
        let first = train_test_split(100, 0.2, 42);
        let second = train_test_split(100, 0.2, 42);
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seed_different_split() {
        let first = train_test_split(100, 0.2, 42);
        let second = train_test_split(100, 0.2, 43);
        assert_ne!(first, second);
    }

    #[test]
    fn test_tiny_inputs_keep_train_non_empty() {
        let (train, test) = train_test_split(2, 0.9, 1);
        assert_eq!(train.len(), 1);
        assert_eq!(test.len(), 1);
    }
}
