//! Benchmarks for document load and save
//!
//! Measures the three stages a timer hits on every save/reload:
//! - Markup parsing into the element tree
//! - Tree → model conversion
//! - Model → text serialization

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use splitwrapper::markup::Element;
use splitwrapper::test_utils::{sample_attempt, sample_splits};
use splitwrapper::{Segment, SegmentTimes, Splits, Time, TimeSpan, load_from_text, to_text};
use std::hint::black_box;

/// A run with a long history, closer to a real file than the unit-test sample.
fn large_run() -> Splits {
    let mut splits = sample_splits();
    splits.attempt_history = (1..=500).map(sample_attempt).collect();
    splits.attempt_count = 500;
    splits.segments = (0..30)
        .map(|i| Segment {
            segment_history: (1..=500)
                .map(|id| SegmentTimes { id, time: Time::real(TimeSpan::from_micros(id as u64 * 1_001)) })
                .collect(),
            ..Segment::new(format!("Segment {i}"))
        })
        .collect();
    splits
}

fn bench_load(c: &mut Criterion) {
    let text = to_text(&large_run());

    let mut group = c.benchmark_group("load");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("parse_markup", |b| {
        b.iter(|| black_box(Element::parse_document(black_box(&text)).unwrap()))
    });

    let tree = Element::parse_document(&text).unwrap();
    group.bench_function("tree_to_model", |b| {
        b.iter(|| black_box(Splits::from_element(black_box(&tree)).unwrap()))
    });

    group.bench_function("load_from_text", |b| {
        b.iter(|| black_box(load_from_text(black_box(&text)).unwrap()))
    });

    group.finish();
}

fn bench_save(c: &mut Criterion) {
    let splits = large_run();

    c.bench_function("to_text", |b| b.iter(|| black_box(to_text(black_box(&splits)))));
}

criterion_group!(benches, bench_load, bench_save);
criterion_main!(benches);
