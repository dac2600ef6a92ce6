//! End-to-end scenario tests for the normalization and classification pipeline.

use std::fs;
use std::io::Write;

use cinelab::classify::run_classification;
use cinelab::config::PipelineConfig;
use cinelab::error::Result;
use cinelab::features::FeatureBuilder;
use cinelab::io::{read_records, write_records};
use cinelab::normalize::Normalizer;
use cinelab::normalize::filter::drop_unlabeled;

const HEADER: &str =
    "title,rating,votes,runtime,year,certificate,genres,directors,cast,plot,countries,languages";

fn write_fixture(rows: &[&str]) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movies.csv");
    let mut file = fs::File::create(&path).unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    (dir, path)
}

/// A small but classifiable corpus: two well-separated classes.
fn training_rows() -> Vec<String> {
    let mut rows = Vec::new();
    for i in 0..12 {
        rows.push(format!(
            "Grim {i},7.{i},15400,125,199{},+18,\"Crime, Thriller\",Jane Roe,\"Actor A, Actor B\",a brutal killer stalks the rainy city at night {i},USA,English",
            i % 10
        ));
        rows.push(format!(
            "Sunny {i},6.{i},980,95,200{},G,\"Family, Comedy\",John Doe,\"Actor C, Actor D\",a cheerful dog goes on a joyful holiday adventure {i},Canada,English",
            i % 10
        ));
    }
    rows
}

#[test]
fn test_reference_row_normalizes_as_documented() -> Result<()> {
    let (_dir, path) = write_fixture(&[
        "Heat,8.3,1500000,125,1995,not rated,\"Crime, Drama\",Michael Mann,\"Al Pacino, Robert De Niro\",A crew of professional thieves!,USA,English",
    ]);

    let raw = read_records(&path)?;
    let (records, summary) = Normalizer::new().normalize(&raw);

    assert_eq!(summary.kept_records, 1);
    let record = &records[0];
    assert_eq!(record.votes_display, "1.5M");
    assert_eq!(record.certificate, "UNRATED");
    assert_eq!(record.runtime_display, "2:05:00");
    assert_eq!(record.runtime_minutes, 125.0);
    assert_eq!(record.genres, vec!["Crime", "Drama"]);
    assert_eq!(record.plot, "A crew of professional thieves");
    Ok(())
}

#[test]
fn test_record_missing_plot_vanishes_entirely() -> Result<()> {
    let mut rows = training_rows();
    rows.push(
        "Ghost,5.0,100,90,1990,PG,Drama,Someone,Someone Else,,USA,English".to_string(),
    );
    let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let (_dir, path) = write_fixture(&row_refs);

    let raw = read_records(&path)?;
    let (records, summary) = Normalizer::new().normalize(&raw);

    // Dropped from the normalized collection...
    assert_eq!(summary.dropped_incomplete, 1);
    assert!(records.iter().all(|r| r.title.as_deref() != Some("Ghost")));

    // ...and therefore absent from the persisted output and feature matrix.
    let out_path = path.with_file_name("normalized.csv");
    write_records(&out_path, &records)?;
    assert!(!fs::read_to_string(&out_path).unwrap().contains("Ghost"));

    let (labeled, _) = drop_unlabeled(records);
    let builder = FeatureBuilder::fit(&labeled, 1000)?;
    let (matrix, _) = builder.build(&labeled)?;
    assert_eq!(matrix.rows(), labeled.len());
    Ok(())
}

#[test]
fn test_normalized_output_renormalizes_unchanged() -> Result<()> {
    // Idempotence at the dataset level: write the normalized output, read
    // it back, normalize again, and the multi-valued fields and labels are
    // identical.
    let rows = training_rows();
    let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let (_dir, path) = write_fixture(&row_refs);

    let (records, _) = Normalizer::new().normalize(&read_records(&path)?);
    let out_path = path.with_file_name("normalized.csv");
    write_records(&out_path, &records)?;

    let (renormalized, summary) = Normalizer::new().normalize(&read_records(&out_path)?);
    assert_eq!(summary.dropped(), 0);
    assert_eq!(records.len(), renormalized.len());
    for (first, second) in records.iter().zip(&renormalized) {
        assert_eq!(first.genres, second.genres);
        assert_eq!(first.cast, second.cast);
        assert_eq!(first.certificate, second.certificate);
        assert_eq!(first.votes_display, second.votes_display);
        assert_eq!(first.runtime_display, second.runtime_display);
    }
    Ok(())
}

#[test]
fn test_classification_end_to_end_with_rule_ordered_labels() -> Result<()> {
    let rows = training_rows();
    let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let (_dir, path) = write_fixture(&row_refs);

    let (records, _) = Normalizer::new().normalize(&read_records(&path)?);
    // The "+18" raw labels resolved through the rewrite chain.
    assert!(records.iter().any(|r| r.certificate == "NC-17"));

    let config = PipelineConfig {
        n_trees: 15,
        max_depth: 8,
        ..PipelineConfig::default()
    };
    let outcome = run_classification(records, &config)?;

    assert_eq!(outcome.train_rows + outcome.test_rows, 24);
    assert!(!outcome.report.classes.is_empty());
    // Reports are keyed by human-readable canonical labels.
    for class in &outcome.report.classes {
        assert!(["NC-17", "G"].contains(&class.label.as_str()));
    }
    Ok(())
}

#[test]
fn test_same_seed_reproduces_identical_metrics() -> Result<()> {
    let rows = training_rows();
    let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let (_dir, path) = write_fixture(&row_refs);

    let config = PipelineConfig {
        n_trees: 10,
        ..PipelineConfig::default()
    };

    let (records, _) = Normalizer::new().normalize(&read_records(&path)?);
    let first = run_classification(records.clone(), &config)?;
    let second = run_classification(records, &config)?;
    assert_eq!(first.report.accuracy, second.report.accuracy);
    assert_eq!(first.report.classes.len(), second.report.classes.len());
    for (a, b) in first.report.classes.iter().zip(&second.report.classes) {
        assert_eq!(a.label, b.label);
        assert_eq!(a.precision, b.precision);
        assert_eq!(a.recall, b.recall);
        assert_eq!(a.support, b.support);
    }
    Ok(())
}

#[test]
fn test_feature_fitting_ignores_split_seed() -> Result<()> {
    // No leakage: the fitted vocabulary is a function of the corpus alone,
    // so reshuffling the split with a different seed cannot change it.
    let rows = training_rows();
    let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let (_dir, path) = write_fixture(&row_refs);

    let (records, _) = Normalizer::new().normalize(&read_records(&path)?);
    let (labeled, _) = drop_unlabeled(records);

    let builder = FeatureBuilder::fit(&labeled, 1000)?;
    let builder_other_seed = FeatureBuilder::fit(&labeled, 1000)?;
    // The builders carry no seed at all; their fitted state is identical.
    assert_eq!(
        builder.vectorizer().vocabulary_size(),
        builder_other_seed.vectorizer().vocabulary_size()
    );
    assert_eq!(builder.genres().classes(), builder_other_seed.genres().classes());
    assert_eq!(builder.labels().classes(), builder_other_seed.labels().classes());

    // And the matrices they produce are cell-for-cell identical whatever
    // seed later drives the split.
    let (matrix_a, labels_a) = builder.build(&labeled)?;
    let (matrix_b, labels_b) = builder_other_seed.build(&labeled)?;
    assert_eq!(labels_a, labels_b);
    for row in 0..matrix_a.rows() {
        assert_eq!(matrix_a.row(row), matrix_b.row(row));
    }
    Ok(())
}

#[test]
fn test_missing_input_file_aborts_with_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    assert!(read_records(&missing).is_err());
    // Nothing was created along the way.
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_unresolved_labels_form_their_own_bucket() -> Result<()> {
    let mut rows = training_rows();
    rows.push(
        "Oddity,6.1,5000,100,1988,Banned,Drama,Someone,Someone Else,a strange tale,France,French"
            .to_string(),
    );
    let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let (_dir, path) = write_fixture(&row_refs);

    let (records, summary) = Normalizer::new().normalize(&read_records(&path)?);
    assert_eq!(summary.unresolved_labels.get("BANNED"), Some(&1));

    // The pass-through label is a real class as far as features go.
    let (labeled, dropped) = drop_unlabeled(records);
    assert_eq!(dropped, 0);
    let builder = FeatureBuilder::fit(&labeled, 1000)?;
    assert!(builder.labels().classes().contains(&"BANNED".to_string()));
    Ok(())
}
