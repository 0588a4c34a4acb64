use serde::Serialize;

use crate::Vector;
use crate::error::{Error, Result, Shortfall};

/// Ordinary least squares with a single predictor.
#[derive(Clone, Debug)]
pub struct LinearRegression {
    fit_intercept: bool,
}

/// A fitted line. Parameters cannot change after fitting.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LinearModel {
    slope: f64,
    intercept: f64,
    n_samples: usize,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self {
            fit_intercept: true,
        }
    }

    pub fn with_intercept(fit_intercept: bool) -> Self {
        Self { fit_intercept }
    }

    pub fn fit(&self, x: &Vector, y: &Vector) -> Result<LinearModel> {
        if x.len() != y.len() {
            return Err(Error::LengthMismatch {
                expected: x.len(),
                actual: y.len(),
            });
        }

        if x.len() < 2 {
            return Err(Error::InsufficientData {
                required: 2,
                actual: x.len(),
                reason: Shortfall::Samples,
            });
        }

        let (slope, intercept) = if self.fit_intercept {
            self.fit_with_intercept(x, y)?
        } else {
            (self.fit_without_intercept(x, y)?, 0.0)
        };

        log::debug!(
            "fitted line on {} samples: slope={slope}, intercept={intercept}",
            x.len()
        );

        Ok(LinearModel {
            slope,
            intercept,
            n_samples: x.len(),
        })
    }

    fn fit_with_intercept(&self, x: &Vector, y: &Vector) -> Result<(f64, f64)> {
        let n = x.len() as f64;
        let x_mean = x.sum() / n;
        let y_mean = y.sum() / n;

        let x_centered = x - x_mean;
        let y_centered = y - y_mean;

        // Relative to the raw sum of squares, so small-scale predictors still fit.
        let ss_xx = x_centered.dot(&x_centered);
        if ss_xx <= f64::EPSILON * x.dot(x) {
            return Err(Error::InsufficientData {
                required: 2,
                actual: 1,
                reason: Shortfall::DistinctValues,
            });
        }

        let slope = x_centered.dot(&y_centered) / ss_xx;
        let intercept = y_mean - slope * x_mean;

        Ok((slope, intercept))
    }

    fn fit_without_intercept(&self, x: &Vector, y: &Vector) -> Result<f64> {
        let xx = x.dot(x);
        if xx == 0.0 {
            return Err(Error::InsufficientData {
                required: 1,
                actual: 0,
                reason: Shortfall::NonZeroValues,
            });
        }

        Ok(x.dot(y) / xx)
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearModel {
    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Number of training samples the line was fit on.
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    pub fn predict_one(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn predict(&self, x: &Vector) -> Vector {
        x.mapv(|v| self.predict_one(v))
    }

    /// Coefficient of determination on `(x, y)`.
    pub fn score(&self, x: &Vector, y: &Vector) -> Result<f64> {
        let y_pred = self.predict(x);
        crate::metrics::r2_score(y, &y_pred)
    }
}
