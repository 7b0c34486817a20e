//! Dense linear algebra used by the regression solvers.

mod inverse;
mod matrix;

pub use inverse::{invert, invert_with_tolerance};
pub use matrix::{
    center_columns, center_vector, multiply, multiply_vector, transpose, with_intercept_column,
    MatrixError,
};
