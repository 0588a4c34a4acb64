//! Terminal charts of the fitted line and its predictions.

use textplots::{Chart, Plot, Shape};

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::linear_model::LinearModel;

pub const X_LABEL: &str = "Government Expenditure (%)";
pub const Y_LABEL: &str = "Unemployment (%)";

/// Smallest canvas `textplots` accepts.
pub const MIN_WIDTH: u32 = 32;
pub const MIN_HEIGHT: u32 = 3;

/// Chart size in braille dots.
#[derive(Clone, Copy, Debug)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 120,
            height: 60,
        }
    }
}

impl ChartSize {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_WIDTH || self.height < MIN_HEIGHT {
            return Err(Error::InvalidChartSize(format!(
                "{}x{} is below the minimum {MIN_WIDTH}x{MIN_HEIGHT}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// `(x, y)` pairs of the observed records.
pub fn points(dataset: &Dataset) -> Vec<(f32, f32)> {
    dataset
        .records()
        .iter()
        .map(|r| {
            (
                r.gov_expenditure_percent() as f32,
                r.unemployment_percent() as f32,
            )
        })
        .collect()
}

/// `(x, predicted y)` pairs for every record.
pub fn predicted_points(model: &LinearModel, dataset: &Dataset) -> Vec<(f32, f32)> {
    dataset
        .records()
        .iter()
        .map(|r| {
            let x = r.gov_expenditure_percent();
            (x as f32, model.predict_one(x) as f32)
        })
        .collect()
}

/// Horizontal extent of the chart. A single distinct x is widened by 1 on
/// each side, an empty dataset gives `0..1`.
pub fn x_range(dataset: &Dataset) -> (f32, f32) {
    let (lo, hi) = dataset
        .records()
        .iter()
        .map(|r| r.gov_expenditure_percent() as f32)
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(x), hi.max(x))
        });

    if lo > hi {
        (0.0, 1.0)
    } else if lo == hi {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi)
    }
}

/// Endpoints of the fitted line over the dataset's x-range.
pub fn fitted_line(model: &LinearModel, dataset: &Dataset) -> Vec<(f32, f32)> {
    let (lo, hi) = x_range(dataset);
    vec![
        (lo, model.predict_one(lo as f64) as f32),
        (hi, model.predict_one(hi as f64) as f32),
    ]
}

fn title(subset: &str, mse: f64) -> String {
    format!(
        "Unemployment vs Government Expenditure ({subset} set):\nMean Squared Error = {mse:.2}"
    )
}

/// Training scatter with the fitted line drawn through it.
pub fn draw_training(model: &LinearModel, train: &Dataset, mse: f64, size: ChartSize) -> Result<()> {
    size.validate()?;
    let (xmin, xmax) = x_range(train);
    let observed = points(train);
    let line = fitted_line(model, train);

    println!("{}", title("Training", mse));
    Chart::new(size.width, size.height, xmin, xmax)
        .lineplot(&Shape::Points(&observed))
        .lineplot(&Shape::Lines(&line))
        .display();
    println!("x: {X_LABEL}, y: {Y_LABEL}");
    Ok(())
}

/// Observed test values next to the model's predictions.
pub fn draw_test(model: &LinearModel, test: &Dataset, mse: f64, size: ChartSize) -> Result<()> {
    size.validate()?;
    let (xmin, xmax) = x_range(test);
    let observed = points(test);
    let predicted = predicted_points(model, test);

    println!("{}", title("Test", mse));
    Chart::new(size.width, size.height, xmin, xmax)
        .lineplot(&Shape::Points(&observed))
        .lineplot(&Shape::Points(&predicted))
        .display();
    println!("x: {X_LABEL}, y: {Y_LABEL}");
    Ok(())
}
