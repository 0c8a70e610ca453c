//! Performance benchmarks for the tagged-value codec.
//!
//! Every facade getter runs one decode, so the codec sits on the hot path of
//! property reads.
//!
//! Run benchmarks with:
//! ```sh
//! cargo bench --bench codec_bench
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dlbridge_core::PropertyValue;
use dlbridge_protocol::codec::{decode, encode};
use std::hint::black_box;

/// One sample per tag, as the host would return them.
const SAMPLES: [(&str, &str); 8] = [
    ("undefined", "UND:"),
    ("string", "STR:DATALOGIC"),
    ("int", "INT:1032"),
    ("bool", "BOL:true"),
    ("float", "FLO:-2.5e3"),
    ("object", r#"OBJ:{"id":17,"rawData":[52,48,48],"text":"400"}"#),
    ("null", "NUL:"),
    ("symbol", "SYM:token"),
];

/// Benchmark decoding each tag.
fn bench_decode_tags(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_tags");
    group.throughput(Throughput::Elements(1));

    for (name, sample) in SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(name), &sample, |b, sample| {
            b.iter(|| black_box(decode(black_box(sample))));
        });
    }

    group.finish();
}

/// Benchmark decoding input that falls back to the unrecognized outcome.
fn bench_decode_unrecognized(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_unrecognized");
    group.throughput(Throughput::Elements(1));

    for (name, sample) in [("unknown_tag", "XYZ:abc"), ("short", "IN"), ("bad_object", "OBJ:{")] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &sample, |b, sample| {
            b.iter(|| black_box(decode(black_box(sample))));
        });
    }

    group.finish();
}

/// Benchmark decoding string payloads of growing size.
fn bench_decode_string_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_string_sizes");

    for size in [10, 100, 1000].iter() {
        let sample = format!("STR:{}", "x".repeat(*size));
        group.throughput(Throughput::Bytes(sample.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &sample, |b, sample| {
            b.iter(|| black_box(decode(black_box(sample))));
        });
    }

    group.finish();
}

/// Benchmark choosing the host setter for each value kind.
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(1));

    let values = [
        ("text", PropertyValue::from("PREFIX")),
        ("int", PropertyValue::from(20)),
        ("flag", PropertyValue::from(true)),
    ];

    for (name, value) in &values {
        group.bench_with_input(BenchmarkId::from_parameter(name), value, |b, value| {
            b.iter(|| black_box(encode(black_box(value))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_decode_tags,
    bench_decode_unrecognized,
    bench_decode_string_sizes,
    bench_encode
);
criterion_main!(benches);
