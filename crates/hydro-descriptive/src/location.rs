//! Extremes and mode

use hydro_core::validate::check_sample;
use hydro_core::Result;
use hydro_frequency::{absolute_frequency, FrequencyKey, FrequencyTable, ModeTieBreak};

/// Smallest value
pub fn min(data: &[f64]) -> Result<f64> {
    check_sample(data, 1)?;
    Ok(data.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Largest value
pub fn max(data: &[f64]) -> Result<f64> {
    check_sample(data, 1)?;
    Ok(data.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// `max - min`
pub fn range(data: &[f64]) -> Result<f64> {
    Ok(max(data)? - min(data)?)
}

/// Most frequent value, ties broken by `tie_break`
pub fn mode(data: &[f64], tie_break: ModeTieBreak) -> Result<f64> {
    let table = absolute_frequency(data)?;
    Ok(table.mode(tie_break).position())
}

/// Every value sharing the maximum count, ascending
pub fn modes(data: &[f64]) -> Result<Vec<f64>> {
    let table = absolute_frequency(data)?;
    Ok(table.modes().iter().map(FrequencyKey::position).collect())
}

/// Key (value or bin) with the maximum count in a tabulated sample
pub fn table_mode(table: &FrequencyTable, tie_break: ModeTieBreak) -> FrequencyKey {
    table.mode(tie_break)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydro_frequency::binned_frequency;

    #[test]
    fn test_extremes() {
        let data = [3.0, -1.0, 8.5, 2.0];
        assert_eq!(min(&data).unwrap(), -1.0);
        assert_eq!(max(&data).unwrap(), 8.5);
        assert_eq!(range(&data).unwrap(), 9.5);
        assert!(min(&[]).is_err());
    }

    #[test]
    fn test_mode_ties() {
        let data = [4.0, 2.0, 4.0, 2.0, 9.0];
        assert_eq!(mode(&data, ModeTieBreak::Lowest).unwrap(), 2.0);
        assert_eq!(mode(&data, ModeTieBreak::Highest).unwrap(), 4.0);
        assert_eq!(modes(&data).unwrap(), vec![2.0, 4.0]);
    }

    #[test]
    fn test_single_value_mode() {
        assert_eq!(mode(&[7.0], ModeTieBreak::Lowest).unwrap(), 7.0);
    }

    #[test]
    fn test_binned_mode() {
        let table = binned_frequency(&[0.5, 1.5, 1.7, 2.2], &[0.0, 1.0, 2.0, 3.0]).unwrap();
        let key = table_mode(&table, ModeTieBreak::Lowest);
        let bin = key.as_bin().unwrap();
        assert_eq!((bin.left, bin.right), (1.0, 2.0));
    }
}
