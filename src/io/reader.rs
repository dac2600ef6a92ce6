//! CSV dataset reader.
//!
//! The first row is the header; columns are matched by (case-insensitive)
//! name, so column order does not matter. Cell types are inferred the same
//! way for every column and re-interpreted downstream: numeric columns read
//! numbers, text columns stringify, multi-valued columns reject
//! non-tokenizable shapes at normalization time.

use std::io::Read;
use std::path::Path;

use ahash::AHashMap;
use csv::ReaderBuilder;
use log::warn;

use crate::error::Result;
use crate::record::{RawRecord, RawValue};

/// Read raw records from a CSV file.
///
/// A missing or unreadable file is fatal. Rows that fail to decode are
/// skipped with a warning; the batch survives.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
    let reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;
    read_from(reader)
}

/// Read raw records from any CSV source. Used by tests and embedders.
pub fn read_records_from_reader<R: Read>(source: R) -> Result<Vec<RawRecord>> {
    let reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);
    read_from(reader)
}

fn read_from<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<RawRecord>> {
    let headers = reader.headers()?.clone();
    let mut columns: AHashMap<String, usize> = AHashMap::new();
    for (idx, name) in headers.iter().enumerate() {
        columns.insert(name.trim().to_lowercase(), idx);
    }

    let column = |names: &[&str]| -> Option<usize> {
        names.iter().find_map(|name| columns.get(*name).copied())
    };
    let title_col = column(&["title"]);
    let rating_col = column(&["rating"]);
    // Normalized output carries display strings under `votes`/`runtime` and
    // the numeric companions alongside; prefer the numeric columns so the
    // persisted dataset re-ingests cleanly.
    let votes_col = column(&["votes_numeric", "votes"]);
    let runtime_col = column(&["runtime_minutes", "runtime"]);
    let year_col = column(&["year"]);
    // The content-rating column goes by several names in the wild.
    let certificate_col = column(&["certificate", "age_group", "content_rating"]);
    let genres_col = column(&["genres"]);
    let directors_col = column(&["directors"]);
    let cast_col = column(&["cast"]);
    let plot_col = column(&["plot"]);
    let countries_col = column(&["countries"]);
    let languages_col = column(&["languages"]);

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!("skipping undecodable CSV row: {e}");
                skipped += 1;
                continue;
            }
        };

        let cell = |col: Option<usize>| -> RawValue {
            col.and_then(|idx| row.get(idx))
                .map(RawValue::infer)
                .unwrap_or(RawValue::Null)
        };

        records.push(RawRecord {
            title: title_col
                .and_then(|idx| row.get(idx))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            rating: cell(rating_col),
            votes: cell(votes_col),
            runtime: cell(runtime_col),
            year: cell(year_col),
            certificate: cell(certificate_col),
            genres: cell(genres_col),
            directors: cell(directors_col),
            cast: cell(cast_col),
            plot: cell(plot_col),
            countries: cell(countries_col),
            languages: cell(languages_col),
        });
    }

    if skipped > 0 {
        warn!("skipped {skipped} undecodable CSV row(s)");
    }
    Ok(records)
}
