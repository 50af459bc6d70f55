//! Annual series extracted from several years of daily discharge

use approx::assert_relative_eq;
use chrono::{Datelike, NaiveDate};
use hydro_series::*;

/// Three years of daily flows with a wet-season peak in February and a
/// recession minimum in late August
fn synthetic_daily() -> DatedSeries {
    let start = NaiveDate::from_ymd_opt(1998, 1, 1).unwrap();
    let values: Vec<f64> = start
        .iter_days()
        .take_while(|d| d.year() < 2001)
        .map(|d| {
            let base = 100.0 + 10.0 * f64::from(d.year() - 1998);
            match (d.month(), d.day()) {
                (2, 14) => base * 8.0,
                (8, 25) => base * 0.1,
                _ => base,
            }
        })
        .collect();
    DatedSeries::daily(start, &values).unwrap()
}

#[test]
fn calendar_year_extremes() {
    let series = synthetic_daily();
    assert_eq!(series.len(), 365 + 365 + 366);
    let summaries = annual_summaries(&series, HydrologicalYear::CALENDAR);
    assert_eq!(summaries.len(), 3);
    for (i, s) in summaries.iter().enumerate() {
        let base = 100.0 + 10.0 * i as f64;
        assert_eq!(s.year, 1998 + i as i32);
        assert_relative_eq!(s.maximum.value, base * 8.0);
        assert_eq!((s.maximum.date.month(), s.maximum.date.day()), (2, 14));
        assert_relative_eq!(s.minimum.value, base * 0.1);
        assert_eq!((s.minimum.date.month(), s.minimum.date.day()), (8, 25));
    }
    assert_eq!(summaries[2].count, 366);
}

#[test]
fn september_water_years() {
    let series = synthetic_daily();
    let summaries = annual_summaries(&series, HydrologicalYear::SEPTEMBER);
    // Jan-Aug 1998 | Sep 1998-Aug 1999 | Sep 1999-Aug 2000 | Sep-Dec 2000
    let years: Vec<i32> = summaries.iter().map(|s| s.year).collect();
    assert_eq!(years, vec![1998, 1999, 2000, 2001]);
    assert_eq!(summaries[1].count, 365);
    // The last partial year has no flood peak
    assert_relative_eq!(summaries[3].maximum.value, 120.0);
    let complete = complete_years(summaries, 365);
    assert_eq!(complete.len(), 2);
}

#[test]
fn monthly_regime_peaks_in_february() {
    let regime = MonthlyRegime::from_series(&synthetic_daily());
    assert_eq!(regime.wettest_month(), Some(2));
    assert_eq!(regime.driest_month(), Some(8));
    let from_september = regime.starting_at(9).unwrap();
    assert_eq!(from_september[5].0, 2);
}

#[test]
fn duration_curve_of_daily_flows() {
    let fdc = synthetic_daily().flow_duration_curve().unwrap();
    // Only three flood days in the record
    assert!(fdc.discharge_at(50.0).unwrap() <= 120.0);
    assert!(fdc.points()[0].value >= 960.0);
}
