use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::linear_model::LinearModel;
use crate::metrics::{mean_squared_error, r2_score};

/// Error summary of a model on one subset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Evaluation {
    pub n_samples: usize,
    pub mse: f64,
    pub r2: f64,
}

/// Score `model` against the records of `dataset`.
pub fn evaluate(model: &LinearModel, dataset: &Dataset) -> Result<Evaluation> {
    let y_true = dataset.labels();
    let y_pred = model.predict(&dataset.features());

    Ok(Evaluation {
        n_samples: dataset.len(),
        mse: mean_squared_error(&y_true, &y_pred)?,
        r2: r2_score(&y_true, &y_pred)?,
    })
}
