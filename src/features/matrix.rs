//! The combined feature matrix.

/// A fixed-width numeric encoding of the full record collection.
///
/// Columns are partitioned into a text-derived TF-IDF block followed by a
/// multi-hot genre block; row order matches the record collection order at
/// construction time. The matrix is never mutated after construction.
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    /// Row-major cell storage, `rows * cols` long.
    data: Vec<f64>,
    rows: usize,
    cols: usize,
    /// Width of the leading text block.
    text_width: usize,
}

impl FeatureMatrix {
    /// Assemble the matrix from per-record text and genre blocks.
    ///
    /// Both iterators must yield rows in the same record order; each text
    /// row is `text_width` long and each genre row `genre_width` long.
    pub fn from_blocks(text_rows: Vec<Vec<f64>>, genre_rows: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(text_rows.len(), genre_rows.len());
        let rows = text_rows.len();
        let text_width = text_rows.first().map(Vec::len).unwrap_or(0);
        let genre_width = genre_rows.first().map(Vec::len).unwrap_or(0);
        let cols = text_width + genre_width;

        let mut data = Vec::with_capacity(rows * cols);
        for (text_row, genre_row) in text_rows.into_iter().zip(genre_rows) {
            data.extend(text_row);
            data.extend(genre_row);
        }

        Self {
            data,
            rows,
            cols,
            text_width,
        }
    }

    /// One row as a slice.
    pub fn row(&self, index: usize) -> &[f64] {
        let start = index * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Width of the leading text-derived block.
    pub fn text_width(&self) -> usize {
        self.text_width
    }

    /// One cell.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_are_concatenated_column_wise() {
        let text = vec![vec![0.1, 0.2], vec![0.3, 0.4]];
        let genres = vec![vec![1.0, 0.0, 1.0], vec![0.0, 1.0, 0.0]];
        let matrix = FeatureMatrix::from_blocks(text, genres);

        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.cols(), 5);
        assert_eq!(matrix.text_width(), 2);
        assert_eq!(matrix.row(0), &[0.1, 0.2, 1.0, 0.0, 1.0]);
        assert_eq!(matrix.row(1), &[0.3, 0.4, 0.0, 1.0, 0.0]);
        assert_eq!(matrix.get(1, 3), 1.0);
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = FeatureMatrix::from_blocks(Vec::new(), Vec::new());
        assert_eq!(matrix.rows(), 0);
        assert_eq!(matrix.cols(), 0);
    }
}
