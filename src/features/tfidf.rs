//! TF-IDF vectorizer for plot text.

use ahash::{AHashMap, AHashSet};

use crate::error::{CinelabError, Result};
use crate::text::{is_stop_word, tokenize};

/// TF-IDF vectorizer with a capped vocabulary and stop word removal.
///
/// Fit once over the full available corpus, never per split: vocabulary
/// selection and IDF weights are a pure function of the documents, so
/// later reshuffling the train/test split cannot change them (fitting is
/// seed-independent).
///
/// Vocabulary selection keeps the `max_features` terms with the highest
/// corpus frequency, breaking ties lexicographically, and assigns column
/// indices in sorted term order: both choices exist to make fitting fully
/// deterministic.
pub struct TfIdfVectorizer {
    /// Vocabulary: term → column index.
    vocabulary: AHashMap<String, usize>,
    /// Inverse document frequency per column.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    n_documents: usize,
    /// Vocabulary size cap.
    max_features: usize,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("max_features", &self.max_features)
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a new vectorizer with the given vocabulary cap.
    pub fn new(max_features: usize) -> Self {
        Self {
            vocabulary: AHashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            max_features,
        }
    }

    /// Fit the vocabulary and IDF weights on the corpus.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        if documents.is_empty() {
            return Err(CinelabError::feature("cannot fit on an empty corpus"));
        }
        self.n_documents = documents.len();

        let mut document_frequency: AHashMap<String, usize> = AHashMap::new();
        let mut corpus_frequency: AHashMap<String, usize> = AHashMap::new();

        for doc in documents {
            let tokens = self.analyze(doc);
            let mut seen: AHashSet<&str> = AHashSet::new();
            for token in &tokens {
                *corpus_frequency.entry(token.clone()).or_insert(0) += 1;
                if seen.insert(token.as_str()) {
                    *document_frequency.entry(token.clone()).or_insert(0) += 1;
                }
            }
        }

        // Cap the vocabulary: highest corpus count first, lexicographic on
        // ties, then index columns in sorted term order.
        let mut ranked: Vec<(String, usize)> = corpus_frequency.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.max_features);

        let mut terms: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        terms.sort();

        let mut vocabulary = AHashMap::with_capacity(terms.len());
        let mut idf = vec![0.0; terms.len()];
        for (idx, term) in terms.into_iter().enumerate() {
            let df = document_frequency.get(&term).copied().unwrap_or(0);
            // Smooth IDF: ln((1 + N) / (1 + df)) + 1
            idf[idx] =
                ((self.n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
            vocabulary.insert(term, idx);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
        Ok(())
    }

    /// Transform a document into a TF-IDF feature vector.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let tokens = self.analyze(document);
        let mut tf = vec![0.0; self.vocabulary.len()];

        for token in &tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                tf[idx] += 1.0;
            }
        }

        // Normalize by document length, then weight by IDF.
        let doc_length = tokens.len() as f64;
        if doc_length > 0.0 {
            for (idx, count) in tf.iter_mut().enumerate() {
                *count = *count / doc_length * self.idf[idx];
            }
        }

        tf
    }

    /// Tokenize and drop stop words.
    fn analyze(&self, text: &str) -> Vec<String> {
        tokenize(text)
            .into_iter()
            .filter(|token| !is_stop_word(token))
            .collect()
    }

    /// Get the size of the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Look up the column index for a term.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}
