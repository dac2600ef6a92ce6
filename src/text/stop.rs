//! English stop word list.
//!
//! Common high-frequency words excluded from the TF-IDF vocabulary because
//! they carry no class signal. The list covers articles, prepositions,
//! conjunctions, pronouns, and auxiliary verbs typical of plot summaries.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Default English stop words.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "an", "and", "are", "as", "at", "be", "been", "but", "by",
    "can", "for", "from", "had", "has", "have", "he", "her", "him", "his", "how", "if", "in",
    "into", "is", "it", "its", "more", "must", "my", "no", "not", "of", "on", "one", "or",
    "our", "she", "so", "some", "such", "than", "that", "the", "their", "them", "then",
    "there", "these", "they", "this", "to", "was", "we", "were", "when", "where", "which",
    "while", "who", "will", "with", "you", "your",
];

/// Default English stop words as a HashSet.
pub static ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

/// Check if a (lowercase) word is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    ENGLISH_STOP_WORDS_SET.contains(word)
}
