//! Worked data sets shared by the root integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, LogNormal};

/// Rainy days per month over 26 months
pub const RAIN_DAYS: [f64; 26] = [
    14.0, 12.0, 13.0, 11.0, 12.0, 13.0, 16.0, 14.0, 14.0, 15.0, 17.0, 14.0, 11.0, 13.0, 14.0,
    15.0, 13.0, 12.0, 14.0, 13.0, 14.0, 13.0, 15.0, 16.0, 12.0, 12.0,
];

/// Twenty trial measurements used for the quartile example
pub const TRIAL: [f64; 20] = [
    48.0, 35.0, 37.0, 52.0, 43.0, 29.0, 61.0, 33.0, 44.0, 55.0, 69.0, 43.0, 22.0, 35.0, 38.0,
    57.0, 53.0, 67.0, 62.0, 48.0,
];

pub const SMALL: [f64; 5] = [7.0, 4.0, 2.0, 5.0, 7.0];

/// Station altitude (m) against mean annual temperature (°C)
pub const ALTITUDE: [f64; 8] = [50.0, 150.0, 300.0, 450.0, 620.0, 800.0, 950.0, 1100.0];
pub const TEMPERATURE: [f64; 8] = [24.1, 23.5, 22.4, 21.6, 20.4, 19.3, 18.5, 17.4];

/// Annual maximum discharges (m³/s)
pub const ANNUAL_PEAKS: [f64; 12] = [
    812.0, 1430.0, 975.0, 2210.0, 1104.0, 1688.0, 901.0, 1259.0, 1520.0, 740.0, 1975.0, 1066.0,
];

/// Seeded log-normal sample, as produced by a synthetic flood record
pub fn synthetic_peaks(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = LogNormal::new(7.0, 0.4).unwrap();
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

/// Three full calendar years of daily flows with one known flood a year
pub fn daily_flows() -> (NaiveDate, Vec<f64>) {
    let start = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
    let days = (NaiveDate::from_ymd_opt(2004, 1, 1).unwrap() - start).num_days() as usize;
    let mut values: Vec<f64> = (0..days)
        .map(|d| 40.0 + 30.0 * (d as f64 * std::f64::consts::TAU / 365.25).sin())
        .collect();
    for (offset, peak) in [(40, 900.0), (400, 1500.0), (800, 1100.0)] {
        values[offset] = peak;
    }
    (start, values)
}

/// Send test logs to the test writer; `RUST_LOG` filters them
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
