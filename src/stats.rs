//! Descriptive statistics over the normalized dataset.
//!
//! Pure read-only reductions for reporting and for external visualization
//! consumers. Nothing here feeds back into the pipeline. Top-N rankings are
//! computed over the 1000 highest-rated movies (rating first, votes as the
//! tie-break); the correlation and decade aggregates cover the whole
//! collection.

use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::record::MovieRecord;

/// Size of the top-movie slice the rankings are computed over.
const TOP_MOVIES: usize = 1000;

/// A value with its occurrence count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCount {
    pub name: String,
    pub count: usize,
}

/// A value with its mean rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMean {
    pub name: String,
    pub mean_rating: f64,
}

/// A genre's share of all genre occurrences, in percent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreShare {
    pub genre: String,
    pub percent: f64,
}

/// Mean rating of the movies released in one decade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecadeRating {
    pub decade: i32,
    pub mean_rating: f64,
}

/// Descriptive aggregates over a normalized record collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetStats {
    pub top_cast: Vec<RankedCount>,
    pub top_directors: Vec<RankedCount>,
    pub genre_shares: Vec<GenreShare>,
    pub top_countries: Vec<RankedCount>,
    pub top_languages: Vec<RankedCount>,
    pub top_directors_by_rating: Vec<RankedMean>,
    pub top_cast_by_rating: Vec<RankedMean>,
    /// Pearson correlation between runtime minutes and rating.
    pub runtime_rating_correlation: f64,
    pub mean_rating_by_decade: Vec<DecadeRating>,
}

/// Compute descriptive statistics over normalized records.
pub fn compute(records: &[MovieRecord], top_n: usize) -> DatasetStats {
    let top_movies = top_rated(records, TOP_MOVIES);

    DatasetStats {
        top_cast: top_counts(&top_movies, |r| &r.cast, top_n),
        top_directors: top_counts(&top_movies, |r| &r.directors, top_n),
        genre_shares: genre_shares(&top_movies),
        top_countries: top_counts(&top_movies, |r| &r.countries, top_n),
        top_languages: top_counts(&top_movies, |r| &r.languages, top_n),
        top_directors_by_rating: top_mean_rating(&top_movies, |r| &r.directors, 5),
        top_cast_by_rating: top_mean_rating(&top_movies, |r| &r.cast, 5),
        runtime_rating_correlation: pearson(
            records.iter().map(|r| r.runtime_minutes),
            records.iter().map(|r| r.rating),
        ),
        mean_rating_by_decade: mean_rating_by_decade(records),
    }
}

/// The `limit` highest-rated records, votes breaking rating ties.
fn top_rated(records: &[MovieRecord], limit: usize) -> Vec<&MovieRecord> {
    let mut sorted: Vec<&MovieRecord> = records.iter().collect();
    sorted.sort_by(|a, b| {
        b.rating
            .total_cmp(&a.rating)
            .then_with(|| b.votes.total_cmp(&a.votes))
    });
    sorted.truncate(limit);
    sorted
}

/// Count occurrences across a multi-valued field and keep the top `n`.
fn top_counts<'a, F>(records: &[&'a MovieRecord], field: F, n: usize) -> Vec<RankedCount>
where
    F: Fn(&'a MovieRecord) -> &'a Vec<String>,
{
    let mut counts: AHashMap<&str, usize> = AHashMap::new();
    for &record in records {
        for value in field(record) {
            *counts.entry(value.as_str()).or_insert(0) += 1;
        }
    }
    let mut ranked: Vec<RankedCount> = counts
        .into_iter()
        .map(|(name, count)| RankedCount {
            name: name.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(n);
    ranked
}

/// Genre occurrence shares in percent, largest first.
fn genre_shares(records: &[&MovieRecord]) -> Vec<GenreShare> {
    let counts = top_counts(records, |r| &r.genres, usize::MAX);
    let total: usize = counts.iter().map(|c| c.count).sum();
    if total == 0 {
        return Vec::new();
    }
    counts
        .into_iter()
        .map(|c| GenreShare {
            genre: c.name,
            percent: c.count as f64 / total as f64 * 100.0,
        })
        .collect()
}

/// Mean rating per distinct value of a multi-valued field, top `n`.
fn top_mean_rating<'a, F>(records: &[&'a MovieRecord], field: F, n: usize) -> Vec<RankedMean>
where
    F: Fn(&'a MovieRecord) -> &'a Vec<String>,
{
    let mut sums: AHashMap<&str, (f64, usize)> = AHashMap::new();
    for &record in records {
        for value in field(record) {
            let entry = sums.entry(value.as_str()).or_insert((0.0, 0));
            entry.0 += record.rating;
            entry.1 += 1;
        }
    }
    let mut ranked: Vec<RankedMean> = sums
        .into_iter()
        .map(|(name, (sum, count))| RankedMean {
            name: name.to_string(),
            mean_rating: sum / count as f64,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.mean_rating
            .total_cmp(&a.mean_rating)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked.truncate(n);
    ranked
}

/// Pearson correlation coefficient of two equally long series.
fn pearson<X, Y>(xs: X, ys: Y) -> f64
where
    X: Iterator<Item = f64>,
    Y: Iterator<Item = f64>,
{
    let pairs: Vec<(f64, f64)> = xs.zip(ys).collect();
    let n = pairs.len() as f64;
    if pairs.is_empty() {
        return 0.0;
    }
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return 0.0;
    }
    covariance / (var_x.sqrt() * var_y.sqrt())
}

/// Mean rating grouped by decade, ascending.
fn mean_rating_by_decade(records: &[MovieRecord]) -> Vec<DecadeRating> {
    let mut sums: AHashMap<i32, (f64, usize)> = AHashMap::new();
    for record in records {
        if let Some(decade) = record.decade {
            let entry = sums.entry(decade).or_insert((0.0, 0));
            entry.0 += record.rating;
            entry.1 += 1;
        }
    }
    let mut decades: Vec<DecadeRating> = sums
        .into_iter()
        .map(|(decade, (sum, count))| DecadeRating {
            decade,
            mean_rating: sum / count as f64,
        })
        .collect();
    decades.sort_by_key(|d| d.decade);
    decades
}

impl fmt::Display for DatasetStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn counts(f: &mut fmt::Formatter<'_>, heading: &str, items: &[RankedCount]) -> fmt::Result {
            writeln!(f, "{heading}:")?;
            for item in items {
                writeln!(f, "  {:<30} {}", item.name, item.count)?;
            }
            writeln!(f)
        }

        counts(f, "Top cast members", &self.top_cast)?;
        counts(f, "Top directors", &self.top_directors)?;

        writeln!(f, "Genre shares:")?;
        for share in &self.genre_shares {
            writeln!(f, "  {:<30} {:.1}%", share.genre, share.percent)?;
        }
        writeln!(f)?;

        counts(f, "Top countries", &self.top_countries)?;
        counts(f, "Top languages", &self.top_languages)?;

        writeln!(f, "Top directors by mean rating:")?;
        for item in &self.top_directors_by_rating {
            writeln!(f, "  {:<30} {:.2}", item.name, item.mean_rating)?;
        }
        writeln!(f, "Top cast by mean rating:")?;
        for item in &self.top_cast_by_rating {
            writeln!(f, "  {:<30} {:.2}", item.name, item.mean_rating)?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "Runtime/rating correlation: {:.3}",
            self.runtime_rating_correlation
        )?;
        writeln!(f, "Mean rating by decade:")?;
        for decade in &self.mean_rating_by_decade {
            writeln!(f, "  {:<6} {:.2}", decade.decade, decade.mean_rating)?;
        }
        Ok(())
    }
}
