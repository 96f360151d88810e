//! Benchmarks for chatpulse parsing, analysis and output.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- parse`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatpulse::config::{ParserConfig, StatsConfig};
use chatpulse::core::output::{to_csv, to_json, to_jsonl};
use chatpulse::core::stats::{UserScope, activity_heatmap, fetch_stats, monthly_timeline};
use chatpulse::core::words::most_common_words;
use chatpulse::core::{FilterConfig, OutputConfig, apply_filters, rows_from};
use chatpulse::parser::ChatLogParser;
use chatpulse::parsing::tokenize;

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_export(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        let day = (i / 1440) % 28 + 1;
        let hour = (i / 60) % 12 + 1;
        let meridiem = if (i / 720) % 2 == 0 { "AM" } else { "PM" };
        if i % 100 == 0 {
            lines.push(format!("{day}/1/24, {hour}:{:02} {meridiem} - Bob added Carol", i % 60));
        } else if i % 10 == 0 {
            lines.push(format!(
                "{day}/1/24, {hour}:{:02} {meridiem} - {sender}: first line\nsecond line {i}",
                i % 60
            ));
        } else {
            lines.push(format!(
                "{day}/1/24, {hour}:{:02} {meridiem} - {sender}: Message number {i} 🎉",
                i % 60
            ));
        }
    }
    lines.join("\n")
}

fn quiet_parser() -> ChatLogParser {
    ChatLogParser::with_config(ParserConfig::new().with_log_warnings(false))
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| black_box(tokenize(black_box(txt))));
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let parser = quiet_parser();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| black_box(parser.parse(black_box(txt))));
        });
    }
    group.finish();
}

// =============================================================================
// Analysis Benchmarks
// =============================================================================

fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");
    let config = StatsConfig::default();

    for size in [1_000_usize, 10_000, 50_000] {
        let records = quiet_parser().parse(&generate_export(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| {
                let scope = UserScope::Overall;
                black_box(fetch_stats(records, &scope, &config));
                black_box(monthly_timeline(records, &scope));
                black_box(activity_heatmap(records, &scope));
            });
        });
    }
    group.finish();
}

fn bench_common_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("common_words");
    let config = StatsConfig::default();

    for size in [1_000_usize, 10_000] {
        let records = quiet_parser().parse(&generate_export(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| black_box(most_common_words(records, &UserScope::Overall, &config)));
        });
    }
    group.finish();
}

fn bench_filter_by_user(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_user");
    let filter = FilterConfig::new().with_user("Alice");

    for size in [1_000_usize, 10_000, 50_000] {
        let records = quiet_parser().parse(&generate_export(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| black_box(apply_filters(records.clone(), &filter)));
        });
    }
    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let config = OutputConfig::default();

    for size in [1_000_usize, 10_000] {
        let records = quiet_parser().parse(&generate_export(size));
        let rows = rows_from(&records);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("csv", size), &rows, |b, rows| {
            b.iter(|| black_box(to_csv(rows, &config).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("json", size), &rows, |b, rows| {
            b.iter(|| black_box(to_json(rows, &config).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("jsonl", size), &rows, |b, rows| {
            b.iter(|| black_box(to_jsonl(rows, &config).unwrap()));
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let parser = quiet_parser();
    let config = OutputConfig::default();

    for size in [1_000_usize, 10_000, 50_000] {
        let txt = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                // parse -> output
                let records = parser.parse(black_box(txt));
                black_box(to_csv(&rows_from(&records), &config).unwrap())
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_tokenize,
    bench_parse,
    bench_stats,
    bench_common_words,
    bench_filter_by_user,
    bench_output,
    bench_full_pipeline,
);

criterion_main!(benches);
