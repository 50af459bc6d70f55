use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::LogNormal;
use hydro_stats::descriptive::{describe, describe_many};
use hydro_stats::frequency::{binned_frequency, edges_from_range, suggested_bin_count};
use hydro_stats::quantile::{quantile, RankDirection, RankedSeries, TieMethod};
use hydro_stats::{AnalysisConfig, FrequencyAnalysis};

/// Generate a seeded log-normal discharge record
fn generate_flows(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = LogNormal::new(5.0, 0.6).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

fn bench_order_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderStatistics");
    for &size in &[100, 1_000, 10_000] {
        let data = generate_flows(size, 42);

        group.bench_with_input(BenchmarkId::new("quantile_p90", size), &data, |b, data| {
            b.iter(|| quantile(black_box(data), 0.9))
        });
        group.bench_with_input(BenchmarkId::new("ranked_series", size), &data, |b, data| {
            b.iter(|| {
                RankedSeries::new(black_box(data), RankDirection::LargestFirst, TieMethod::Average)
            })
        });
    }
    group.finish();
}

fn bench_summaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("Summaries");
    let data = generate_flows(10_000, 7);
    group.bench_function("describe_10000", |b| b.iter(|| describe(black_box(&data))));

    let stations: Vec<Vec<f64>> = (0..64).map(|i| generate_flows(3_650, i)).collect();
    group.bench_function("describe_many_64_stations", |b| {
        b.iter(|| describe_many(black_box(&stations)))
    });

    group.bench_function("binned_frequency_10000", |b| {
        b.iter(|| {
            let (lo, hi) = data
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)));
            let k = suggested_bin_count(data.len()).unwrap();
            let edges = edges_from_range(lo, hi, k).unwrap();
            binned_frequency(black_box(&data), &edges)
        })
    });
    group.finish();
}

fn bench_frequency_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("FrequencyAnalysis");
    let config = AnalysisConfig::default();
    for &years in &[30, 100, 1_000] {
        let peaks = generate_flows(years, 11);
        group.bench_with_input(BenchmarkId::new("run", years), &peaks, |b, peaks| {
            b.iter(|| FrequencyAnalysis::run(black_box(peaks), &config))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_order_statistics,
    bench_summaries,
    bench_frequency_analysis
);
criterion_main!(benches);
