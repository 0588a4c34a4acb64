use std::fmt;

use thiserror::Error;

/// Errors raised while loading, splitting, fitting, scoring or plotting.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed data: {0}")]
    DataFormat(String),

    /// Too few usable observations. A constant predictor is reported here
    /// too, with `reason` set to [`Shortfall::DistinctValues`].
    #[error("Insufficient data: need at least {required} {reason}, got {actual}")]
    InsufficientData {
        required: usize,
        actual: usize,
        reason: Shortfall,
    },

    #[error("Invalid train/test split: {0}")]
    InvalidSplit(String),

    #[error("Length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invalid chart size: {0}")]
    InvalidChartSize(String),
}

/// What an [`Error::InsufficientData`] ran short of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortfall {
    /// Observations.
    Samples,
    /// Distinct predictor values; the predictor has zero variance.
    DistinctValues,
    /// Non-zero predictor values, for a line through the origin.
    NonZeroValues,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shortfall::Samples => write!(f, "samples"),
            Shortfall::DistinctValues => write!(f, "distinct predictor values"),
            Shortfall::NonZeroValues => write!(f, "non-zero predictor values"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_message() {
        let err = Error::InsufficientData {
            required: 2,
            actual: 1,
            reason: Shortfall::DistinctValues,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: need at least 2 distinct predictor values, got 1"
        );
    }
}
