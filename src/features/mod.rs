//! Feature extraction: sanitized text and genre lists into one numeric matrix.

pub mod labels;
pub mod matrix;
pub mod multi_hot;
pub mod tfidf;

pub use labels::LabelEncoder;
pub use matrix::FeatureMatrix;
pub use multi_hot::MultiHotEncoder;
pub use tfidf::TfIdfVectorizer;

use log::info;

use crate::error::{CinelabError, Result};
use crate::record::MovieRecord;

/// Fits the vectorizer, genre encoder, and label encoder over a record
/// collection, then builds the feature matrix and label vector.
///
/// Fitting always runs over the full available corpus, never per split, so
/// vocabulary and IDF weights are identical regardless of how the
/// train/test split is later drawn (the no-leakage contract lives here;
/// the classifier honors its half by training on the train partition only).
pub struct FeatureBuilder {
    vectorizer: TfIdfVectorizer,
    genres: MultiHotEncoder,
    labels: LabelEncoder,
}

impl std::fmt::Debug for FeatureBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureBuilder")
            .field("text_vocabulary", &self.vectorizer.vocabulary_size())
            .field("genre_columns", &self.genres.width())
            .field("classes", &self.labels.len())
            .finish()
    }
}

impl FeatureBuilder {
    /// Fit all encoders over the record collection.
    ///
    /// Every record must already carry a canonical label; the caller drops
    /// unlabeled records beforehand.
    pub fn fit(records: &[MovieRecord], max_features: usize) -> Result<Self> {
        if records.is_empty() {
            return Err(CinelabError::feature(
                "cannot fit features on an empty record collection",
            ));
        }

        let documents: Vec<String> = records.iter().map(|r| r.plot.clone()).collect();
        let mut vectorizer = TfIdfVectorizer::new(max_features);
        vectorizer.fit(&documents)?;

        let mut genres = MultiHotEncoder::new();
        genres.fit(records.iter().map(|r| r.genres.as_slice()))?;

        let mut labels = LabelEncoder::new();
        labels.fit(records.iter().map(|r| r.certificate.as_str()))?;

        info!(
            "fitted features: {} text terms, {} genre columns, {} classes",
            vectorizer.vocabulary_size(),
            genres.width(),
            labels.len()
        );

        Ok(Self {
            vectorizer,
            genres,
            labels,
        })
    }

    /// Build the feature matrix and label vector, row order preserved.
    pub fn build(&self, records: &[MovieRecord]) -> Result<(FeatureMatrix, Vec<usize>)> {
        let mut text_rows = Vec::with_capacity(records.len());
        let mut genre_rows = Vec::with_capacity(records.len());
        let mut label_codes = Vec::with_capacity(records.len());

        for record in records {
            text_rows.push(self.vectorizer.transform(&record.plot));
            genre_rows.push(self.genres.transform(&record.genres));
            let code = self.labels.encode(&record.certificate).ok_or_else(|| {
                CinelabError::feature(format!(
                    "label {:?} was not observed during fitting",
                    record.certificate
                ))
            })?;
            label_codes.push(code);
        }

        Ok((FeatureMatrix::from_blocks(text_rows, genre_rows), label_codes))
    }

    /// The label encoder, for decoding report rows.
    pub fn labels(&self) -> &LabelEncoder {
        &self.labels
    }

    /// The fitted genre encoder.
    pub fn genres(&self) -> &MultiHotEncoder {
        &self.genres
    }

    /// The fitted text vectorizer.
    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(plot: &str, genres: &[&str], certificate: &str) -> MovieRecord {
        MovieRecord {
            title: None,
            rating: 7.0,
            votes: 1000.0,
            votes_display: "1K".to_string(),
            runtime_minutes: 100.0,
            runtime_display: "1:40:00".to_string(),
            year: Some(1999),
            decade: Some(1990),
            certificate: certificate.to_string(),
            genres: genres.iter().map(|s| s.to_string()).collect(),
            directors: vec!["D".to_string()],
            cast: vec!["C".to_string()],
            plot: plot.to_string(),
            countries: vec!["US".to_string()],
            languages: vec!["English".to_string()],
        }
    }

    fn sample_records() -> Vec<MovieRecord> {
        vec![
            record("a detective hunts a killer", &["Crime", "Drama"], "PG-13"),
            record("a killer escapes the city", &["Crime"], "NC-17"),
            record("two friends on a road trip", &["Comedy"], "PG"),
        ]
    }

    #[test]
    fn test_matrix_shape_and_row_order() {
        let records = sample_records();
        let builder = FeatureBuilder::fit(&records, 1000).unwrap();
        let (matrix, labels) = builder.build(&records).unwrap();

        assert_eq!(matrix.rows(), 3);
        assert_eq!(
            matrix.cols(),
            builder.vectorizer().vocabulary_size() + builder.genres().width()
        );
        // Genre block sits after the text block; row 0 carries Crime+Drama.
        let genre_base = matrix.text_width();
        let crime_col = builder
            .genres()
            .classes()
            .iter()
            .position(|g| g == "Crime")
            .unwrap();
        assert_eq!(matrix.get(0, genre_base + crime_col), 1.0);
        assert_eq!(matrix.get(2, genre_base + crime_col), 0.0);

        // Labels decode back through the retained mapping.
        assert_eq!(builder.labels().decode(labels[0]), Some("PG-13"));
        assert_eq!(builder.labels().decode(labels[2]), Some("PG"));
    }

    #[test]
    fn test_fitting_is_split_independent() {
        // Fitting happens over the whole corpus, so the fitted vocabulary
        // cannot depend on any later split seed.
        let records = sample_records();
        let first = FeatureBuilder::fit(&records, 1000).unwrap();
        let second = FeatureBuilder::fit(&records, 1000).unwrap();
        assert_eq!(
            first.vectorizer().vocabulary_size(),
            second.vectorizer().vocabulary_size()
        );
        assert_eq!(first.genres().classes(), second.genres().classes());
        assert_eq!(first.labels().classes(), second.labels().classes());
        for term in ["detective", "killer", "road"] {
            assert_eq!(
                first.vectorizer().term_index(term),
                second.vectorizer().term_index(term)
            );
        }
    }
}
