//! Benchmarks for race-control classification and board construction
//!
//! Uses the in-memory sample session so runs are CI-safe and repeatable.
//! A full race produces a few hundred messages; boards are rebuilt on every
//! watcher refresh, so both paths should stay well under a millisecond.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pitboard::test_utils::{sample_messages, sample_roster, sample_snapshot, sample_timeline};
use pitboard::{RaceControlClassifier, RaceControlMessage, SessionBoard, classify};
use std::hint::black_box;

fn race_length_feed(count: usize) -> Vec<RaceControlMessage> {
    sample_messages().into_iter().cycle().take(count).collect()
}

fn bench_classify(c: &mut Criterion) {
    let roster = sample_roster();
    let timeline = sample_timeline();
    let messages = sample_messages();

    let mut group = c.benchmark_group("classify");

    group.bench_function("penalty_message", |b| {
        b.iter(|| black_box(classify(black_box(&messages[1]), &roster, &timeline)));
    });

    group.bench_function("general_message", |b| {
        b.iter(|| black_box(classify(black_box(&messages[4]), &roster, &timeline)));
    });

    group.finish();
}

fn bench_classify_all(c: &mut Criterion) {
    let roster = sample_roster();
    let timeline = sample_timeline();
    let classifier = RaceControlClassifier::default();

    let mut group = c.benchmark_group("classify_all");
    for count in [50usize, 250, 1000] {
        let feed = race_length_feed(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &feed, |b, feed| {
            b.iter(|| black_box(classifier.classify_all(feed, &roster, &timeline)));
        });
    }
    group.finish();
}

fn bench_session_board(c: &mut Criterion) {
    let snapshot = sample_snapshot();

    c.bench_function("session_board_build", |b| {
        b.iter(|| black_box(SessionBoard::build(black_box(&snapshot))));
    });
}

criterion_group!(benches, bench_classify, bench_classify_all, bench_session_board);
criterion_main!(benches);
