//! Load → filter → split → fit → evaluate.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::dataset::{Dataset, GOV_EXPENDITURE_CUTOFF};
use crate::error::Result;
use crate::evaluation::{Evaluation, evaluate};
use crate::linear_model::{LinearModel, LinearRegression};
use crate::loader::{self, LoaderOptions};

/// Everything one regression run depends on.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub data_path: PathBuf,
    pub loader: LoaderOptions,
    /// Records with government expenditure at or above this are dropped.
    pub cutoff: f64,
    pub test_size: f64,
    pub seed: u64,
    pub fit_intercept: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("economic-data-africa.csv"),
            loader: LoaderOptions::default(),
            cutoff: GOV_EXPENDITURE_CUTOFF,
            test_size: 0.2,
            seed: 0,
            fit_intercept: true,
        }
    }
}

impl PipelineConfig {
    pub fn data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    pub fn loader(mut self, loader: LoaderOptions) -> Self {
        self.loader = loader;
        self
    }

    pub fn cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn test_size(mut self, test_size: f64) -> Self {
        self.test_size = test_size;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }
}

/// Outcome of one run.
#[derive(Clone, Debug, Serialize)]
pub struct RegressionReport {
    pub n_loaded: usize,
    pub n_filtered: usize,
    pub model: LinearModel,
    pub train: Evaluation,
    pub test: Evaluation,
    #[serde(skip)]
    pub train_set: Dataset,
    #[serde(skip)]
    pub test_set: Dataset,
}

/// Read `config.data_path` and run the regression on it.
pub fn run(config: &PipelineConfig) -> Result<RegressionReport> {
    let dataset = loader::load_file(&config.data_path, &config.loader)?;
    run_on(&dataset, config)
}

/// Run the regression on an already loaded dataset.
pub fn run_on(dataset: &Dataset, config: &PipelineConfig) -> Result<RegressionReport> {
    let filtered = dataset.filter_below(config.cutoff);
    log::info!(
        "kept {} of {} records with government expenditure below {}",
        filtered.len(),
        dataset.len(),
        config.cutoff
    );
    if filtered.len() < dataset.len() {
        log::debug!(
            "dropped {} records at or above the cutoff",
            dataset.len() - filtered.len()
        );
    }

    let (train_set, test_set) = filtered.train_test_split(config.test_size, config.seed)?;
    log::info!(
        "split into {} training and {} test records (seed {})",
        train_set.len(),
        test_set.len(),
        config.seed
    );

    let model = LinearRegression::with_intercept(config.fit_intercept)
        .fit(&train_set.features(), &train_set.labels())?;
    log::info!(
        "slope {:.4}, intercept {:.4}",
        model.slope(),
        model.intercept()
    );

    let train = evaluate(&model, &train_set)?;
    let test = evaluate(&model, &test_set)?;
    log::info!("training MSE {:.2}, test MSE {:.2}", train.mse, test.mse);

    Ok(RegressionReport {
        n_loaded: dataset.len(),
        n_filtered: filtered.len(),
        model,
        train,
        test,
        train_set,
        test_set,
    })
}

impl fmt::Display for RegressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Records: {} loaded, {} after filter ({} training, {} test)",
            self.n_loaded, self.n_filtered, self.train.n_samples, self.test.n_samples
        )?;
        writeln!(f, "Slope:     {:.4}", self.model.slope())?;
        writeln!(f, "Intercept: {:.4}", self.model.intercept())?;
        writeln!(
            f,
            "Training:  MSE = {:.2}, R² = {:.4}",
            self.train.mse, self.train.r2
        )?;
        write!(
            f,
            "Test:      MSE = {:.2}, R² = {:.4}",
            self.test.mse, self.test.r2
        )
    }
}
