//! Coin-flip simulation of a long-run relative frequency

use hydro_core::{Error, Result};
use rand::Rng;

/// Running proportion of heads after each of `flips` fair coin tosses
///
/// The random source is injected; a seeded generator makes the sequence
/// reproducible.
pub fn running_heads_frequency<R: Rng + ?Sized>(rng: &mut R, flips: usize) -> Result<Vec<f64>> {
    running_frequency(rng, flips, 0.5)
}

/// Running proportion of successes for trials with success probability `p`
pub fn running_frequency<R: Rng + ?Sized>(rng: &mut R, trials: usize, p: f64) -> Result<Vec<f64>> {
    if trials == 0 {
        return Err(Error::InvalidParameter("at least one trial is required".to_string()));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::DomainError {
            value: p,
            context: "trial probability",
        });
    }
    let mut successes = 0usize;
    Ok((1..=trials)
        .map(|i| {
            if rng.gen_bool(p) {
                successes += 1;
            }
            successes as f64 / i as f64
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let a = running_heads_frequency(&mut ChaCha8Rng::seed_from_u64(7), 200).unwrap();
        let b = running_heads_frequency(&mut ChaCha8Rng::seed_from_u64(7), 200).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 200);
        assert!(a[0] == 0.0 || a[0] == 1.0);
    }

    #[test]
    fn test_long_run_frequency_settles() {
        let run = running_heads_frequency(&mut ChaCha8Rng::seed_from_u64(42), 20_000).unwrap();
        let last = run[run.len() - 1];
        assert!((last - 0.5).abs() < 0.02, "long-run frequency {last}");
    }

    #[test]
    fn test_certain_events() {
        let run = running_frequency(&mut ChaCha8Rng::seed_from_u64(1), 10, 1.0).unwrap();
        assert!(run.iter().all(|&f| f == 1.0));
        assert!(running_frequency(&mut ChaCha8Rng::seed_from_u64(1), 0, 0.5).is_err());
        assert!(running_frequency(&mut ChaCha8Rng::seed_from_u64(1), 5, 2.0).is_err());
    }
}
