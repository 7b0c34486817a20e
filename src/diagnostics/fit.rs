//! Goodness-of-fit metrics for predictions.
//!
//! Inputs of different lengths, or empty inputs, yield `NaN`.

use faer::Col;

/// Mean squared error: Σ(yᵢ − ŷᵢ)² / n.
pub fn mean_squared_error(y_true: &Col<f64>, y_pred: &Col<f64>) -> f64 {
    let n = y_true.nrows();
    if n == 0 || y_pred.nrows() != n {
        return f64::NAN;
    }

    let rss: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&yi, &pi)| (yi - pi).powi(2))
        .sum();

    rss / n as f64
}

/// Root mean squared error.
pub fn root_mean_squared_error(y_true: &Col<f64>, y_pred: &Col<f64>) -> f64 {
    mean_squared_error(y_true, y_pred).sqrt()
}

/// Coefficient of determination, 1 − RSS/TSS.
///
/// A constant target has TSS = 0: the score is 1 when the predictions
/// reproduce it exactly and 0 otherwise.
pub fn r_squared(y_true: &Col<f64>, y_pred: &Col<f64>) -> f64 {
    let n = y_true.nrows();
    if n == 0 || y_pred.nrows() != n {
        return f64::NAN;
    }

    let y_mean: f64 = y_true.iter().sum::<f64>() / n as f64;

    let tss: f64 = y_true.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
    let rss: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&yi, &pi)| (yi - pi).powi(2))
        .sum();

    if tss == 0.0 {
        if rss == 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        1.0 - rss / tss
    }
}
