//! Vote count display formatting.

/// Format a vote count as a human-readable magnitude string.
///
/// Counts of a million or more render with one decimal and an "M" suffix,
/// counts of a thousand or more with zero decimals and a "K" suffix, and
/// smaller counts as a plain integer. The numeric value is retained on the
/// record under a separate attribute; the display string is never parsed
/// back for analysis.
///
/// # Examples
///
/// ```
/// use cinelab::normalize::votes::format_votes;
///
/// assert_eq!(format_votes(1_500_000.0), "1.5M");
/// assert_eq!(format_votes(15_400.0), "15K");
/// assert_eq!(format_votes(734.0), "734");
/// ```
pub fn format_votes(votes: f64) -> String {
    if votes >= 1_000_000.0 {
        format!("{:.1}M", votes / 1_000_000.0)
    } else if votes >= 1_000.0 {
        format!("{:.0}K", votes / 1_000.0)
    } else {
        format!("{}", votes as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millions_have_one_decimal() {
        assert_eq!(format_votes(1_500_000.0), "1.5M");
        assert_eq!(format_votes(1_000_000.0), "1.0M");
        assert_eq!(format_votes(2_340_000.0), "2.3M");
    }

    #[test]
    fn test_thousands_have_no_decimals() {
        assert_eq!(format_votes(1_000.0), "1K");
        assert_eq!(format_votes(15_400.0), "15K");
        assert_eq!(format_votes(999_500.0), "1000K");
    }

    #[test]
    fn test_small_counts_are_plain_integers() {
        assert_eq!(format_votes(0.0), "0");
        assert_eq!(format_votes(999.0), "999");
        // Fractional imputed means truncate like an integer cast.
        assert_eq!(format_votes(734.6), "734");
    }
}
