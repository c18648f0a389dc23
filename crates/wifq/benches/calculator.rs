//! Benchmarks for the calculation pipeline.
//!
//! Measures abjad summation throughput, full seven-type derivation, and
//! angel-name encoding.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use wifq::prelude::*;

const SHORT_TEXT: &str = "بسم الله الرحمن الرحيم";
const LONG_TEXT: &str = "اللهم صل على سيدنا محمد وعلى آل سيدنا محمد \
                         صلاة تنجينا بها من جميع الأهوال والآفات \
                         وتقضي لنا بها جميع الحاجات";

fn bench_abjad_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("abjad_sum");

    group.throughput(Throughput::Bytes(SHORT_TEXT.len() as u64));
    group.bench_function("short", |b| {
        b.iter(|| abjad::sum(black_box(SHORT_TEXT)));
    });

    group.throughput(Throughput::Bytes(LONG_TEXT.len() as u64));
    group.bench_function("long", |b| {
        b.iter(|| abjad::sum(black_box(LONG_TEXT)));
    });

    group.finish();
}

fn bench_value_sets(c: &mut Criterion) {
    let total = abjad::sum(LONG_TEXT).total;
    let mut group = c.benchmark_group("value_set");
    group.throughput(Throughput::Elements(Square::ALL.len() as u64));

    group.bench_function("all_seven_types", |b| {
        b.iter(|| {
            for square in Square::ALL {
                black_box(derivation::value_set(black_box(total), square));
            }
        });
    });

    group.finish();
}

fn bench_angel_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("angel_name");

    group.bench_function("small_value", |b| {
        b.iter(|| angel::name(black_box(Value::valid(13)), Variant::Benevolent));
    });

    group.bench_function("large_value", |b| {
        b.iter(|| angel::name(black_box(Value::valid(999_999)), Variant::Benevolent));
    });

    group.finish();
}

criterion_group!(benches, bench_abjad_sum, bench_value_sets, bench_angel_names);
criterion_main!(benches);
