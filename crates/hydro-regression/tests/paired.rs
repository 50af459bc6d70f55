//! Correlation and regression on paired observations

use approx::assert_relative_eq;
use hydro_regression::*;
use proptest::prelude::*;

// Altitude (m) and mean annual temperature (°C)
const ALTITUDE: [f64; 8] = [10.0, 150.0, 420.0, 600.0, 780.0, 910.0, 1100.0, 1350.0];
const TEMPERATURE: [f64; 8] = [24.8, 24.1, 22.3, 21.5, 20.2, 19.6, 18.3, 16.9];

#[test]
fn temperature_falls_with_altitude() {
    let r = pearson_correlation(&ALTITUDE, &TEMPERATURE).unwrap();
    assert!(r < -0.99, "r = {r}");

    let fit = fit_ols(&ALTITUDE, &TEMPERATURE).unwrap();
    assert!(fit.slope < 0.0);
    // Lapse rate of roughly six degrees per kilometre
    assert!((fit.slope * 1000.0 + 6.0).abs() < 0.5, "slope = {}", fit.slope);

    // For a single predictor R² equals r²
    let r2 = r_squared(&ALTITUDE, &TEMPERATURE, &fit).unwrap();
    assert_relative_eq!(r2, r * r, epsilon = 1e-9);
}

#[test]
fn prediction_band_covers_observations() {
    let band = prediction_band(&ALTITUDE, &TEMPERATURE, 0.95).unwrap();
    for (p, &y) in band.points.iter().zip(TEMPERATURE.iter()) {
        assert!(p.lower <= y && y <= p.upper, "{y} outside [{}, {}]", p.lower, p.upper);
    }
    let wider = prediction_band(&ALTITUDE, &TEMPERATURE, 0.99).unwrap();
    assert!(wider.margin_at(500.0) > band.margin_at(500.0));
}

proptest! {
    #[test]
    fn exact_lines_have_unit_correlation(
        xs in prop::collection::vec(-100f64..100.0, 3..50),
        a in -50f64..50.0,
        b in 0.1f64..10.0,
    ) {
        prop_assume!(xs.iter().any(|&x| (x - xs[0]).abs() > 1e-3));
        let up: Vec<f64> = xs.iter().map(|&x| a + b * x).collect();
        let down: Vec<f64> = xs.iter().map(|&x| a - b * x).collect();
        prop_assert!((pearson_correlation(&xs, &up).unwrap() - 1.0).abs() < 1e-9);
        prop_assert!((pearson_correlation(&xs, &down).unwrap() + 1.0).abs() < 1e-9);
    }

    #[test]
    fn correlation_is_bounded(
        pairs in prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 2..60),
    ) {
        let (xs, ys): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        if let Ok(r) = pearson_correlation(&xs, &ys) {
            prop_assert!((-1.0..=1.0).contains(&r));
        }
    }

    #[test]
    fn ols_recovers_exact_line(
        xs in prop::collection::vec(-100f64..100.0, 3..50),
        a in -50f64..50.0,
        b in -10f64..10.0,
    ) {
        prop_assume!(xs.iter().any(|&x| (x - xs[0]).abs() > 1.0));
        let ys: Vec<f64> = xs.iter().map(|&x| a + b * x).collect();
        let fit = fit_ols(&xs, &ys).unwrap();
        prop_assert!((fit.slope - b).abs() < 1e-6);
        prop_assert!((fit.intercept - a).abs() < 1e-6);
    }
}
