use std::io::Write;

use econreg::loader::{self, LoaderOptions};
use econreg::{Dataset, Error, PipelineConfig, Record, Shortfall, pipeline};
use proptest::prelude::*;
use tempfile::NamedTempFile;

fn write_table(rows: &[(f64, f64)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Country;Year;GovExpenditurePerc;UnemploymentPerc").unwrap();
    for (i, (x, y)) in rows.iter().enumerate() {
        writeln!(file, "Country{i};2016;{x};{y}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn runs_end_to_end_on_a_file() {
    let mut rows: Vec<(f64, f64)> = (0..50).map(|i| (i as f64, 3.0 * i as f64 + 1.0)).collect();
    rows.push((80.0, 0.0));
    rows.push((120.5, 7.0));
    let file = write_table(&rows);

    let config = PipelineConfig::default().data_path(file.path());
    let report = pipeline::run(&config).unwrap();

    assert_eq!(report.n_loaded, 52);
    assert_eq!(report.n_filtered, 50);
    assert_eq!(report.train.n_samples, 40);
    assert_eq!(report.test.n_samples, 10);
    assert!((report.model.slope() - 3.0).abs() < 1e-10);
    assert!((report.model.intercept() - 1.0).abs() < 1e-10);
    assert!(report.train.mse.abs() < 1e-10);
    assert!(report.test.mse.abs() < 1e-10);
    assert!(
        report
            .train_set
            .records()
            .iter()
            .chain(report.test_set.records())
            .all(|r| r.gov_expenditure_percent() < 80.0)
    );
}

#[test]
fn report_serializes_to_json() {
    let rows: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, 2.0 * i as f64)).collect();
    let file = write_table(&rows);

    let report = pipeline::run(&PipelineConfig::default().data_path(file.path())).unwrap();
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["n_filtered"], 10);
    assert!((json["model"]["slope"].as_f64().unwrap() - 2.0).abs() < 1e-10);
    assert!(json.get("train_set").is_none());
}

#[test]
fn missing_column_is_a_data_format_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Country;GovExpenditurePerc").unwrap();
    writeln!(file, "Algeria;40").unwrap();
    file.flush().unwrap();

    let err = pipeline::run(&PipelineConfig::default().data_path(file.path())).unwrap_err();
    assert!(matches!(err, Error::DataFormat(_)));
}

#[test]
fn fewer_than_two_training_records_is_insufficient() {
    let file = write_table(&[(10.0, 1.0), (20.0, 2.0), (85.0, 3.0)]);
    let config = PipelineConfig::default()
        .data_path(file.path())
        .test_size(0.5);

    let err = pipeline::run(&config).unwrap_err();
    assert!(matches!(
        err,
        Error::InsufficientData {
            required: 2,
            actual: 1,
            reason: Shortfall::Samples
        }
    ));
}

#[test]
fn constant_predictor_is_insufficient_data() {
    let rows: Vec<(f64, f64)> = (0..10).map(|i| (25.0, i as f64)).collect();
    let file = write_table(&rows);

    let err = pipeline::run(&PipelineConfig::default().data_path(file.path())).unwrap_err();
    assert!(matches!(
        err,
        Error::InsufficientData {
            reason: Shortfall::DistinctValues,
            ..
        }
    ));
}

#[test]
fn comma_separated_input() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "spend,jobless").unwrap();
    for i in 0..10 {
        writeln!(file, "{},{}", i, 5 - i).unwrap();
    }
    file.flush().unwrap();

    let options = LoaderOptions::default()
        .delimiter(b',')
        .x_column("spend")
        .y_column("jobless");
    let dataset = loader::load_file(file.path(), &options).unwrap();
    assert_eq!(dataset.len(), 10);

    let report = pipeline::run_on(&dataset, &PipelineConfig::default()).unwrap();
    assert!((report.model.slope() + 1.0).abs() < 1e-10);
}

fn gov_expenditure() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(80.0),
        Just(80.0 - f64::EPSILON * 80.0),
        0.0f64..120.0,
    ]
}

fn records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec((gov_expenditure(), -50.0f64..50.0), 0..200)
        .prop_map(|rows| rows.into_iter().map(|(x, y)| Record::new(x, y)).collect())
}

proptest! {
    #[test]
    fn filter_keeps_exactly_the_rows_below_cutoff(rows in records()) {
        let dataset = Dataset::from_records(rows.clone());
        let filtered = dataset.filter_below(80.0);

        let expected: Vec<Record> = rows
            .into_iter()
            .filter(|r| r.gov_expenditure_percent() < 80.0)
            .collect();
        prop_assert_eq!(filtered.records(), expected.as_slice());
        prop_assert!(filtered.records().iter().all(|r| r.gov_expenditure_percent() < 80.0));
    }

    #[test]
    fn split_is_a_deterministic_partition(rows in records(), seed in any::<u64>()) {
        let dataset = Dataset::from_records(rows);
        prop_assume!(dataset.len() >= 2);

        let (train, test) = dataset.train_test_split(0.2, seed).unwrap();
        prop_assert_eq!(train.len() + test.len(), dataset.len());
        prop_assert!(!train.is_empty() && !test.is_empty());

        let mut input: Vec<(f64, f64)> = dataset
            .records()
            .iter()
            .map(|r| (r.gov_expenditure_percent(), r.unemployment_percent()))
            .collect();
        let mut combined: Vec<(f64, f64)> = train
            .records()
            .iter()
            .chain(test.records())
            .map(|r| (r.gov_expenditure_percent(), r.unemployment_percent()))
            .collect();
        input.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
        combined.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
        prop_assert_eq!(input, combined);

        let again = dataset.train_test_split(0.2, seed).unwrap();
        prop_assert_eq!((train, test), again);
    }
}
