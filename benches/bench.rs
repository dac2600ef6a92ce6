//! Criterion benchmarks for the Cinelab pipeline.
//!
//! Covers the hot paths of a batch run:
//! - Multi-valued field parsing and label canonicalization
//! - Plot sanitization
//! - TF-IDF fitting and transformation

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use cinelab::features::TfIdfVectorizer;
use cinelab::normalize::list_field::parse_list_field;
use cinelab::normalize::rating::canonicalize_rating;
use cinelab::record::RawValue;
use cinelab::text::sanitize;

/// Generate synthetic plot documents for benchmarking.
fn generate_plots(count: usize) -> Vec<String> {
    let words = [
        "detective", "killer", "city", "night", "family", "love", "war", "escape", "journey",
        "secret", "revenge", "heist", "small", "town", "murder", "friendship", "betrayal",
        "chase", "island", "winter",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 30 + (i % 40);
        let mut doc_words = Vec::with_capacity(doc_length);
        for j in 0..doc_length {
            doc_words.push(words[(i * 7 + j * 3) % words.len()]);
        }
        documents.push(doc_words.join(" "));
    }
    documents
}

fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let joined = RawValue::Text("['Al Pacino', 'Robert De Niro', 'Val Kilmer', 'Jon Voight']".to_string());
    group.bench_function("parse_list_field", |b| {
        b.iter(|| parse_list_field(black_box(&joined)).unwrap())
    });

    group.bench_function("canonicalize_rating", |b| {
        b.iter(|| canonicalize_rating(black_box("tv 14")))
    });

    let plot = "A lonely detective; hunting a killer -- through the city's darkest alleys! (1995)";
    group.bench_function("sanitize", |b| b.iter(|| sanitize(black_box(plot))));

    group.finish();
}

fn bench_tfidf(c: &mut Criterion) {
    let mut group = c.benchmark_group("tfidf");
    let documents = generate_plots(1000);
    group.throughput(Throughput::Elements(documents.len() as u64));

    group.bench_function("fit_1000_docs", |b| {
        b.iter(|| {
            let mut vectorizer = TfIdfVectorizer::new(1000);
            vectorizer.fit(black_box(&documents)).unwrap();
            vectorizer
        })
    });

    let mut fitted = TfIdfVectorizer::new(1000);
    fitted.fit(&documents).unwrap();
    group.bench_function("transform", |b| {
        b.iter(|| fitted.transform(black_box(&documents[0])))
    });

    group.finish();
}

criterion_group!(benches, bench_normalization, bench_tfidf);
criterion_main!(benches);
