//! Hypothesis tests.
//!
//! z-tests and t-tests on summary statistics, the paired t-test on raw
//! samples, chi-square goodness-of-fit and independence tests, and one-way
//! ANOVA. Every test checks its preconditions first and fails with
//! [`TestError::InvalidParameter`] without computing a statistic.
//!
//! The free functions use [`TestOptions::default()`]: two-sided p-values and
//! the approximate sampling-distribution CDFs. Use [`HypothesisTester`] to
//! choose a one-sided alternative or exact CDFs.
//!
//! # Example
//!
//! ```rust
//! use statkit::hypothesis::{one_sample_t_test, Alternative, HypothesisTester, TestOptions};
//! use statkit::special::DistributionMethod;
//!
//! let result = one_sample_t_test(5.4, 5.0, 1.2, 30).unwrap();
//! assert!(result.p_value > 0.05);
//!
//! let tester = HypothesisTester::new(
//!     TestOptions::builder()
//!         .alternative(Alternative::Greater)
//!         .method(DistributionMethod::Exact)
//!         .build(),
//! );
//! let one_sided = tester.one_sample_t_test(5.4, 5.0, 1.2, 30).unwrap();
//! assert!(one_sided.p_value < result.p_value);
//! ```

mod anova;
mod chi_square;
mod types;

pub use anova::one_way_anova;
pub use chi_square::{chi_square_goodness_of_fit, chi_square_independence};
pub use t_test::{one_sample_t_test, paired_t_test, welch_t_test};
pub use types::{
    Alternative, HypothesisTester, TestError, TestOptions, TestOptionsBuilder, TestResult,
};
pub use z_test::{one_sample_z_test, two_sample_z_test};
