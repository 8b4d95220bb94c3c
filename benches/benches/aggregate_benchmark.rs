//! Aggregation throughput benchmarks.
//!
//! Run with: `cargo bench --package candlecsv-bench`

use candlecsv_bench::{SeriesConfig, synthetic_csv};
use candlecsv_lib::prelude::*;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Spans covering calendar and fixed-length bucketing.
fn spans() -> Vec<(&'static str, Span)> {
    ["1m", "1h", "day", "week", "month"]
        .into_iter()
        .map(|s| (s, s.parse().unwrap()))
        .collect()
}

/// Reads, aggregates and writes every candle, returning the output size.
fn run_candles(input: &str, span: Span) -> usize {
    let format = DateFormat::default();
    let time = Column::new(1).unwrap();
    let value = Column::new(2).unwrap();
    let output_format = DateFormat::new(span.default_output_format()).unwrap();

    let mut aggregator = CandleAggregator::new(span);
    let mut writer = CandleWriter::new(Vec::new(), CsvOptions::new(), output_format).unwrap();
    for row in RowReader::new(input.as_bytes(), CsvOptions::new()) {
        let row = row.unwrap();
        let timestamp = format.parse(row.cell(time).unwrap()).unwrap();
        let sample = Sample::from_cell(timestamp, row.cell(value).unwrap());
        if let Some(candle) = aggregator.process(sample).unwrap() {
            writer.write_candle(&candle).unwrap();
        }
    }
    if let Some(candle) = aggregator.finish() {
        writer.write_candle(&candle).unwrap();
    }
    writer.into_inner().unwrap().len()
}

fn aggregate_benchmark(c: &mut Criterion) {
    let config = SeriesConfig::default();
    let input = synthetic_csv(&config);

    let mut group = c.benchmark_group("candle");
    group.throughput(Throughput::Elements(config.rows as u64));

    for (name, span) in spans() {
        group.bench_with_input(BenchmarkId::new("span", name), &span, |b, span| {
            b.iter(|| run_candles(black_box(&input), *span));
        });
    }
    group.finish();
}

fn columns_benchmark(c: &mut Criterion) {
    let config = SeriesConfig {
        gap_every: 50,
        ..SeriesConfig::default()
    };
    let input = synthetic_csv(&config);
    let ops: Vec<ColumnOp> = ["lineno", "copy:1", "sum:2", "ma:2:20", "smooth:2:0.1"]
        .into_iter()
        .map(|s| s.parse().unwrap())
        .collect();

    let mut group = c.benchmark_group("columns");
    group.throughput(Throughput::Elements(config.rows as u64));
    group.bench_function("pipeline", |b| {
        b.iter(|| {
            let mut pipeline = ColumnPipeline::new(ops.clone());
            let mut writer = RowWriter::new(Vec::new(), CsvOptions::new());
            for row in RowReader::new(black_box(input.as_bytes()), CsvOptions::new()) {
                let row = row.unwrap();
                let cells: Vec<&str> = row.record().iter().collect();
                let out = pipeline.data_row(row.number(), &cells).unwrap();
                writer.write_row(&out).unwrap();
            }
            writer.into_inner().unwrap().len()
        });
    });
    group.finish();
}

criterion_group!(benches, aggregate_benchmark, columns_benchmark);
criterion_main!(benches);
