//! Linear models for regression.
//!
//! `LinearRegression` is the estimator: it holds the fitting options and
//! turns a training sample into a `LinearModel`, the immutable fitted line.
//!
//! # Examples
//!
//! ```rust
//! use econreg::LinearRegression;
//! use ndarray::array;
//!
//! let x = array![1.0, 2.0, 3.0];
//! let y = array![2.0, 4.0, 6.0];
//!
//! let model = LinearRegression::new().fit(&x, &y).unwrap();
//! let predictions = model.predict(&x);
//! assert!((predictions[2] - 6.0).abs() < 1e-10);
//! ```

mod linear_regression;

pub use linear_regression::{LinearModel, LinearRegression};
