//! Property tests for sample validation

use hydro_core::validate::{check_finite, check_open_probability, check_positive};
use hydro_core::{Error, Sample};
use proptest::prelude::*;

proptest! {
    #[test]
    fn finite_values_are_kept_unchanged(values in prop::collection::vec(-1e12f64..1e12, 1..100)) {
        let sample = Sample::new(values.clone()).unwrap();
        prop_assert_eq!(sample.values(), values.as_slice());
        prop_assert_eq!(sample.len(), values.len());
        prop_assert_eq!(sample.into_values(), values);
    }

    #[test]
    fn non_finite_value_is_reported_at_its_index(
        mut values in prop::collection::vec(-1e6f64..1e6, 1..50),
        position in any::<prop::sample::Index>(),
        bad in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)],
    ) {
        let index = position.index(values.len());
        values[index] = bad;
        let err = Sample::new(values.clone()).unwrap_err();
        let at_index = matches!(err, Error::InvalidValue { index: i, .. } if i == index);
        prop_assert!(at_index);
        prop_assert!(check_finite(&values).is_err());
    }

    #[test]
    fn first_non_positive_value_is_reported(
        mut values in prop::collection::vec(0.001f64..1e6, 1..50),
        position in any::<prop::sample::Index>(),
        bad in -1e6f64..=0.0,
    ) {
        let index = position.index(values.len());
        values[index] = bad;
        let at_index = matches!(
            check_positive(&values),
            Err(Error::NonPositiveValue { index: i, .. }) if i == index
        );
        prop_assert!(at_index);
    }

    #[test]
    fn open_probabilities_are_accepted(p in 1e-12f64..(1.0 - 1e-12)) {
        prop_assert!(check_open_probability(p, "probability").is_ok());
    }
}

#[test]
fn test_empty_sample_is_rejected() {
    assert!(matches!(
        Sample::new(Vec::new()),
        Err(Error::InsufficientData { expected: 1, actual: 0 })
    ));
}
