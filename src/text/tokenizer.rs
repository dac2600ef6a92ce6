//! Whitespace tokenization for vectorization.

/// Split sanitized text into lowercase tokens on whitespace.
///
/// Input is expected to be sanitized already (letters, digits, whitespace
/// only), so a whitespace split is a faithful word segmentation.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(|s| s.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(
            tokenize("A Detective Hunts"),
            vec!["a", "detective", "hunts"]
        );
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("two   words\n"), vec!["two", "words"]);
        assert!(tokenize("   ").is_empty());
    }
}
