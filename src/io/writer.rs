//! Normalized dataset writer.

use std::path::Path;

use csv::Writer;

use crate::error::Result;
use crate::record::MovieRecord;

/// Column order of the persisted normalized dataset.
///
/// The logical input columns come back out with multi-valued columns
/// re-serialized comma-joined, `votes`/`runtime` as display strings, and
/// the derived numeric companions (`votes_numeric`, `runtime_minutes`,
/// `decade`) appended.
const OUTPUT_HEADERS: &[&str] = &[
    "title",
    "rating",
    "votes",
    "votes_numeric",
    "runtime",
    "runtime_minutes",
    "year",
    "decade",
    "certificate",
    "genres",
    "directors",
    "cast",
    "plot",
    "countries",
    "languages",
];

/// Write normalized records to a CSV file.
pub fn write_records(path: &Path, records: &[MovieRecord]) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(OUTPUT_HEADERS)?;

    for record in records {
        writer.write_record(&[
            record.title.clone().unwrap_or_default(),
            record.rating.to_string(),
            record.votes_display.clone(),
            record.votes.to_string(),
            record.runtime_display.clone(),
            record.runtime_minutes.to_string(),
            record.year.map(|y| y.to_string()).unwrap_or_default(),
            record.decade.map(|d| d.to_string()).unwrap_or_default(),
            record.certificate.clone(),
            record.genres.join(", "),
            record.directors.join(", "),
            record.cast.join(", "),
            record.plot.clone(),
            record.countries.join(", "),
            record.languages.join(", "),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
