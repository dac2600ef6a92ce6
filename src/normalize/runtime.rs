//! Runtime display formatting.
//!
//! Numeric minutes are rendered as an "H:MM:SS" display string with a
//! numeric-minutes companion retained for analysis. The pair round-trips:
//! parsing the display string back yields the original minute count for any
//! non-negative integer input. Fractional inputs (mean-imputed runtimes)
//! lose precision only below the whole-second boundary.

use crate::error::{CinelabError, Result};

/// Format a runtime in minutes as "H:MM:SS".
///
/// # Examples
///
/// ```
/// use cinelab::normalize::runtime::format_runtime;
///
/// assert_eq!(format_runtime(125.0), "2:05:00");
/// assert_eq!(format_runtime(90.5), "1:30:30");
/// ```
pub fn format_runtime(minutes: f64) -> String {
    let total_seconds = if minutes > 0.0 {
        (minutes * 60.0).round() as u64
    } else {
        0
    };
    let hours = total_seconds / 3600;
    let mins = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours}:{mins:02}:{secs:02}")
}

/// Parse an "H:MM:SS" display string back into minutes.
pub fn parse_runtime(display: &str) -> Result<f64> {
    let parts: Vec<&str> = display.split(':').collect();
    if parts.len() != 3 {
        return Err(CinelabError::malformed(format!(
            "runtime display {display:?} is not H:MM:SS"
        )));
    }
    let hours: f64 = parts[0]
        .parse()
        .map_err(|_| CinelabError::malformed(format!("bad hours in {display:?}")))?;
    let mins: f64 = parts[1]
        .parse()
        .map_err(|_| CinelabError::malformed(format!("bad minutes in {display:?}")))?;
    let secs: f64 = parts[2]
        .parse()
        .map_err(|_| CinelabError::malformed(format!("bad seconds in {display:?}")))?;
    Ok(hours * 60.0 + mins + secs / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_runtime() {
        assert_eq!(format_runtime(125.0), "2:05:00");
        assert_eq!(format_runtime(0.0), "0:00:00");
        assert_eq!(format_runtime(59.0), "0:59:00");
        assert_eq!(format_runtime(60.0), "1:00:00");
        assert_eq!(format_runtime(600.0), "10:00:00");
    }

    #[test]
    fn test_round_trip_integer_minutes() {
        for minutes in [0u32, 1, 59, 60, 90, 125, 240, 873] {
            let display = format_runtime(minutes as f64);
            let parsed = parse_runtime(&display).unwrap();
            assert_eq!(parsed, minutes as f64, "display {display:?}");
        }
    }

    #[test]
    fn test_fractional_minutes_truncate_to_whole_seconds() {
        // 104.3 minutes is 6258 whole seconds; the display drops nothing
        // above the second.
        let display = format_runtime(104.3);
        assert_eq!(display, "1:44:18");
        let parsed = parse_runtime(&display).unwrap();
        assert!((parsed - 104.3).abs() < 1.0 / 60.0);
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(parse_runtime("125").is_err());
        assert!(parse_runtime("2:05").is_err());
        assert!(parse_runtime("a:b:c").is_err());
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(format_runtime(-5.0), "0:00:00");
    }
}
