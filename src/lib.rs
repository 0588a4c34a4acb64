//! Ordinary least-squares regression of unemployment on government
//! expenditure, with a seeded train/test split and mean-squared-error
//! evaluation.
//!
//! ```rust
//! use econreg::{Dataset, LinearRegression, Record};
//!
//! let dataset = Dataset::from_records(vec![
//!     Record::new(1.0, 2.0),
//!     Record::new(2.0, 4.0),
//!     Record::new(3.0, 6.0),
//! ]);
//!
//! let model = LinearRegression::new()
//!     .fit(&dataset.features(), &dataset.labels())
//!     .unwrap();
//! assert!((model.slope() - 2.0).abs() < 1e-10);
//! ```

pub use ndarray::Array1;

pub mod dataset;
pub mod error;
pub mod evaluation;
pub mod linear_model;
pub mod loader;
pub mod metrics;
pub mod pipeline;
pub mod plot;

pub use dataset::{Dataset, GOV_EXPENDITURE_CUTOFF, Record};
pub use error::{Error, Result, Shortfall};
pub use evaluation::{Evaluation, evaluate};
pub use linear_model::{LinearModel, LinearRegression};
pub use loader::LoaderOptions;
pub use pipeline::{PipelineConfig, RegressionReport};

pub type Vector = Array1<f64>;
