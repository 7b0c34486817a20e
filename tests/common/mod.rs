//! Common test utilities and data generators.
#![allow(dead_code)]

use faer::{Col, Mat};

/// Generate linear data: y = intercept + Σ (j + 1)·x_j + noise.
///
/// Returns the design, the target and the true slopes.
pub fn generate_linear_data(
    n_samples: usize,
    n_features: usize,
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> (Mat<f64>, Col<f64>, Col<f64>) {
    // Deterministic LCG in [-1, 1] for reproducibility
    let mut rng_state = seed;
    let next_rand = |state: &mut u64| -> f64 {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((*state >> 32) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let true_slopes = Col::from_fn(n_features, |j| (j + 1) as f64);
    let mut x = Mat::zeros(n_samples, n_features);
    let mut y = Col::zeros(n_samples);

    for i in 0..n_samples {
        let mut yi = intercept;
        for j in 0..n_features {
            x[(i, j)] = next_rand(&mut rng_state);
            yi += x[(i, j)] * true_slopes[j];
        }
        yi += noise_std * next_rand(&mut rng_state);
        y[i] = yi;
    }

    (x, y, true_slopes)
}

/// Three features where column 1 is exactly twice column 0.
pub fn generate_collinear_data(n_samples: usize) -> (Mat<f64>, Col<f64>) {
    let mut x = Mat::zeros(n_samples, 3);
    let mut y = Col::zeros(n_samples);

    for i in 0..n_samples {
        x[(i, 0)] = i as f64;
        x[(i, 1)] = 2.0 * i as f64;
        x[(i, 2)] = (i * i) as f64;
        y[i] = 1.0 + 2.0 * x[(i, 0)] + 3.0 * x[(i, 2)];
    }

    (x, y)
}

/// The 3x2 design X = [[1, 2], [2, 1], [3, 3]] with y = [6, 5, 12].
pub fn reference_data() -> (Mat<f64>, Col<f64>) {
    let rows = [[1.0, 2.0], [2.0, 1.0], [3.0, 3.0]];
    let x = Mat::from_fn(3, 2, |i, j| rows[i][j]);
    let y = Col::from_fn(3, |i| [6.0, 5.0, 12.0][i]);
    (x, y)
}

/// Build a matrix from row slices.
pub fn mat_from_rows(rows: &[&[f64]]) -> Mat<f64> {
    let ncols = rows.first().map_or(0, |r| r.len());
    Mat::from_fn(rows.len(), ncols, |i, j| rows[i][j])
}

/// Build a column vector from a slice.
pub fn col_from_slice(values: &[f64]) -> Col<f64> {
    Col::from_fn(values.len(), |i| values[i])
}
