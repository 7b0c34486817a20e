//! OLS regression tests.

mod common;

use approx::assert_relative_eq;
use faer::{Col, Mat};
use statkit::solvers::{
    ordinary_least_squares, FittedRegressor, OlsRegressor, RegressionError, Regressor,
};

// ============================================================================
// Basic Regression Tests
// ============================================================================

#[test]
fn test_reference_design() {
    let (x, y) = common::reference_data();

    let beta = ordinary_least_squares(&x, &y).expect("fit should succeed");

    assert_eq!(beta.nrows(), 3);
    assert_relative_eq!(beta[0], -1.0, epsilon = 1e-6);
    assert_relative_eq!(beta[1], 5.0 / 3.0, epsilon = 1e-6);
    assert_relative_eq!(beta[2], 8.0 / 3.0, epsilon = 1e-6);
}

#[test]
fn test_simple_linear_regression_with_intercept() {
    // y = 2 + 3*x
    let x = Mat::from_fn(5, 1, |i, _| i as f64);
    let y = Col::from_fn(5, |i| 2.0 + 3.0 * i as f64);

    let fitted = OlsRegressor::default().fit(&x, &y).expect("fit should succeed");

    assert_relative_eq!(fitted.intercept(), 2.0, epsilon = 1e-10);
    assert_relative_eq!(fitted.coefficients()[1], 3.0, epsilon = 1e-10);
    assert_relative_eq!(fitted.r_squared(), 1.0, epsilon = 1e-10);
}

#[test]
fn test_multiple_regression() {
    // y = 1 + 2*x1 + 3*x2 with non-collinear features
    let mut x = Mat::zeros(10, 2);
    let mut y = Col::zeros(10);

    for i in 0..10 {
        x[(i, 0)] = i as f64;
        x[(i, 1)] = (i * i) as f64;
        y[i] = 1.0 + 2.0 * x[(i, 0)] + 3.0 * x[(i, 1)];
    }

    let fitted = OlsRegressor::builder().build().fit(&x, &y).expect("fit should succeed");

    assert_relative_eq!(fitted.intercept(), 1.0, epsilon = 1e-8);
    assert_relative_eq!(fitted.coefficients()[1], 2.0, epsilon = 1e-8);
    assert_relative_eq!(fitted.coefficients()[2], 3.0, epsilon = 1e-8);
    assert_relative_eq!(fitted.r_squared(), 1.0, epsilon = 1e-10);
}

#[test]
fn test_recovers_noisy_coefficients() {
    let (x, y, true_slopes) = common::generate_linear_data(200, 3, 0.5, 0.01, 42);

    let fitted = OlsRegressor::default().fit(&x, &y).expect("fit should succeed");
    let result = fitted.result();

    assert_relative_eq!(result.intercept(), 0.5, epsilon = 0.01);
    for j in 0..3 {
        assert_relative_eq!(result.slopes()[j], true_slopes[j], epsilon = 0.01);
    }
    assert!(result.r_squared > 0.999);
    assert_eq!(result.n_observations, 200);
    assert_eq!(result.n_features, 3);
    assert_eq!(result.iterations, None);
}

#[test]
fn test_two_observations_edge_case() {
    // Minimum viable regression: 2 observations, 1 feature
    let x = Mat::from_fn(2, 1, |i, _| i as f64);
    let y = Col::from_fn(2, |i| 1.0 + 2.0 * i as f64);

    let fitted = OlsRegressor::default().fit(&x, &y).expect("fit should succeed");

    assert_relative_eq!(fitted.coefficients()[1], 2.0, epsilon = 1e-10);
    assert_relative_eq!(fitted.intercept(), 1.0, epsilon = 1e-10);
}

#[test]
fn test_residuals_sum_to_zero() {
    let (x, y, _) = common::generate_linear_data(50, 2, 3.0, 0.5, 7);

    let fitted = OlsRegressor::default().fit(&x, &y).expect("fit should succeed");
    let result = fitted.result();

    let sum: f64 = result.residuals.iter().sum();
    assert!(sum.abs() < 1e-8, "residual sum = {sum}");
    for i in 0..50 {
        assert_relative_eq!(result.fitted_values[i] + result.residuals[i], y[i], epsilon = 1e-10);
    }
}

// ============================================================================
// Singularity Tests
// ============================================================================

#[test]
fn test_collinear_features_are_singular() {
    let (x, y) = common::generate_collinear_data(10);

    let err = OlsRegressor::default().fit(&x, &y).unwrap_err();
    assert_eq!(err, RegressionError::SingularMatrix);
}

#[test]
fn test_constant_feature_is_singular() {
    // A constant column duplicates the intercept column
    let x = Mat::from_fn(6, 2, |i, j| if j == 0 { i as f64 } else { 4.0 });
    let y = Col::from_fn(6, |i| 1.0 + i as f64);

    assert_eq!(
        ordinary_least_squares(&x, &y).unwrap_err(),
        RegressionError::SingularMatrix
    );
}

#[test]
fn test_more_features_than_observations_is_singular() {
    let x = common::mat_from_rows(&[&[1.0, 2.0, 3.0], &[2.0, 0.0, 1.0]]);
    let y = common::col_from_slice(&[1.0, 2.0]);

    assert!(matches!(
        ordinary_least_squares(&x, &y),
        Err(RegressionError::SingularMatrix)
    ));
}

#[test]
fn test_pivot_tolerance_rejects_near_collinear() {
    let mut x = Mat::zeros(8, 2);
    let mut y = Col::zeros(8);
    for i in 0..8 {
        x[(i, 0)] = i as f64;
        x[(i, 1)] = i as f64 + 1e-9 * ((i % 3) as f64);
        y[i] = 2.0 * i as f64;
    }

    let strict = OlsRegressor::builder().pivot_tolerance(1e-6).build();
    assert_eq!(
        strict.fit(&x, &y).unwrap_err(),
        RegressionError::SingularMatrix
    );
}

// ============================================================================
// Input Validation Tests
// ============================================================================

#[test]
fn test_dimension_mismatch() {
    let x = Mat::<f64>::zeros(5, 2);
    let y = Col::<f64>::zeros(4);

    assert_eq!(
        OlsRegressor::default().fit(&x, &y).unwrap_err(),
        RegressionError::DimensionMismatch { x_rows: 5, y_len: 4 }
    );
}

#[test]
fn test_empty_input() {
    let x = Mat::<f64>::zeros(0, 2);
    let y = Col::<f64>::zeros(0);

    assert_eq!(
        ordinary_least_squares(&x, &y).unwrap_err(),
        RegressionError::EmptyInput
    );
}

// ============================================================================
// Prediction Tests
// ============================================================================

#[test]
fn test_predict_and_score() {
    let (x, y, _) = common::generate_linear_data(100, 2, 1.0, 0.0, 3);
    let fitted = OlsRegressor::default().fit(&x, &y).expect("fit should succeed");

    let x_new = common::mat_from_rows(&[&[0.0, 0.0], &[1.0, 1.0]]);
    let predictions = fitted.predict(&x_new).expect("predict should succeed");
    assert_relative_eq!(predictions[0], 1.0, epsilon = 1e-8);
    assert_relative_eq!(predictions[1], 4.0, epsilon = 1e-8);

    let score = fitted.score(&x, &y).expect("score should succeed");
    assert_relative_eq!(score, 1.0, epsilon = 1e-10);
}

#[test]
fn test_predict_wrong_width() {
    let (x, y) = common::reference_data();
    let fitted = OlsRegressor::default().fit(&x, &y).expect("fit should succeed");

    let x_new = Mat::<f64>::zeros(2, 3);
    assert!(matches!(
        fitted.predict(&x_new),
        Err(RegressionError::CoefficientMismatch { .. })
    ));
}
