//! Parametric hypothesis tests on means and variances
//!
//! Each test is a pure function from sample(s), hypothesized parameter(s), a
//! significance level α and a [`Tail`] to a [`TestResult`] holding the
//! statistic, critical value(s), degrees of freedom, p-value and decision.
//!
//! | Test | Statistic | Reference |
//! |------|-----------|-----------|
//! | [`z_test_one_sample`] | Z | N(0, 1) |
//! | [`t_test_one_sample`] | T | t, `N − 1` |
//! | [`z_test_two_sample`] | Z | N(0, 1) |
//! | [`pooled_t_test`] | T | t, `N + M − 2` |
//! | [`welch_t_test`] | T | t, Welch-Satterthwaite |
//! | [`chi_square_variance_test`] | K | χ², `N − 1` or `N` |
//! | [`f_test`] | F | F, `(N − 1, M − 1)` or `(N, M)` |
//!
//! H0 is rejected when the statistic falls in the rejection region bounded
//! by the critical value(s); the p-value is below α exactly when it does.
//!
//! # Example
//!
//! ```rust
//! use hydro_testing::{f_test_summary, Decision, Tail, VarianceSummary};
//!
//! let x = VarianceSummary::from_std_dev(7, 1.9);
//! let y = VarianceSummary::from_std_dev(9, 0.8);
//! let result = f_test_summary(x, y, 0.05, Tail::Greater).unwrap();
//! assert_eq!(result.decision, Decision::Reject);
//! ```

mod evaluate;
pub mod means;
pub mod types;
pub mod variances;

pub use means::{
    pooled_t_test, t_test_one_sample, welch_degrees_of_freedom, welch_t_test, z_test_one_sample,
    z_test_two_sample,
};
pub use types::{
    CriticalValue, Decision, DegreesOfFreedom, Tail, TestKind, TestResult, VarianceSummary,
};
pub use variances::{
    chi_square_variance_test, chi_square_variance_test_summary, f_test, f_test_summary,
};

pub use hydro_core::{Error, Result};
