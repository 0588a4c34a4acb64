use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use econreg::plot::{self, ChartSize};
use econreg::{GOV_EXPENDITURE_CUTOFF, LoaderOptions, PipelineConfig, pipeline};

/// Regress unemployment on government expenditure and report the error.
#[derive(Parser, Debug)]
#[command(name = "econreg")]
#[command(version)]
#[command(about = "Least-squares regression of unemployment on government expenditure", long_about = None)]
struct Cli {
    /// Delimited table with a header row
    #[arg(value_name = "DATA", default_value = "economic-data-africa.csv")]
    data: PathBuf,

    /// Field delimiter (a single ASCII character)
    #[arg(short, long, default_value = ";")]
    delimiter: char,

    /// Predictor column header
    #[arg(long, default_value = "GovExpenditurePerc")]
    x_column: String,

    /// Target column header
    #[arg(long, default_value = "UnemploymentPerc")]
    y_column: String,

    /// Drop records with government expenditure at or above this value
    #[arg(long, default_value_t = GOV_EXPENDITURE_CUTOFF)]
    cutoff: f64,

    /// Fraction of records held out for testing
    #[arg(long, default_value_t = 0.2)]
    test_size: f64,

    /// Seed for the train/test shuffle
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Fit the line through the origin
    #[arg(long)]
    no_intercept: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Skip the terminal charts
    #[arg(long)]
    no_plot: bool,

    /// Chart width in braille dots
    #[arg(long, default_value_t = 120, value_parser = clap::value_parser!(u32).range((plot::MIN_WIDTH as i64)..))]
    width: u32,

    /// Chart height in braille dots
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range((plot::MIN_HEIGHT as i64)..))]
    height: u32,
}

impl Cli {
    fn config(&self) -> Result<PipelineConfig> {
        if !self.delimiter.is_ascii() {
            bail!("delimiter must be a single ASCII character, got '{}'", self.delimiter);
        }

        let loader = LoaderOptions::default()
            .delimiter(self.delimiter as u8)
            .x_column(&self.x_column)
            .y_column(&self.y_column);

        Ok(PipelineConfig::default()
            .data_path(self.data.clone())
            .loader(loader)
            .cutoff(self.cutoff)
            .test_size(self.test_size)
            .seed(self.seed)
            .fit_intercept(!self.no_intercept))
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.config()?;

    let report = pipeline::run(&config)
        .with_context(|| format!("regression on {} failed", config.data_path.display()))?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report")?
        );
    } else {
        println!("{report}");
    }

    if !cli.no_plot {
        let size = ChartSize::new(cli.width, cli.height).context("chart size")?;
        plot::draw_training(&report.model, &report.train_set, report.train.mse, size)?;
        plot::draw_test(&report.model, &report.test_set, report.test.mse, size)?;
    }

    Ok(())
}
