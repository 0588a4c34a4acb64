use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, Trim};

use crate::dataset::{Dataset, Record};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// How to read the economic indicators table.
#[derive(Clone, Debug, PartialEq)]
pub struct LoaderOptions {
    pub delimiter: u8,
    /// Header of the predictor column.
    pub x_column: String,
    /// Header of the target column.
    pub y_column: String,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            x_column: "GovExpenditurePerc".to_string(),
            y_column: "UnemploymentPerc".to_string(),
        }
    }
}

impl LoaderOptions {
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn x_column(mut self, name: &str) -> Self {
        self.x_column = name.to_string();
        self
    }

    pub fn y_column(mut self, name: &str) -> Self {
        self.y_column = name.to_string();
        self
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Load a dataset from a delimited file with a header row.
pub fn load_file(path: &Path, options: &LoaderOptions) -> Result<Dataset> {
    let file = std::fs::File::open(path)
        .map_err(|e| Error::DataFormat(format!("opening {}: {e}", path.display())))?;
    let dataset = load_from_reader(file, options)?;

    log::info!("loaded {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Load a dataset from any reader. Bytes are decoded as ISO-8859-1.
pub fn load_from_reader<R: Read>(reader: R, options: &LoaderOptions) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(|e| Error::DataFormat(format!("reading CSV headers: {e}")))?
        .iter()
        .map(latin1)
        .collect();

    let x_idx = column_index(&headers, &options.x_column)?;
    let y_idx = column_index(&headers, &options.y_column)?;

    let mut records = Vec::new();
    let mut row = ByteRecord::new();
    let mut row_no = 0usize;

    loop {
        let more = reader
            .read_byte_record(&mut row)
            .map_err(|e| Error::DataFormat(format!("CSV row {}: {e}", row_no + 1)))?;
        if !more {
            break;
        }
        row_no += 1;

        let x = parse_cell(&row, x_idx, row_no, &options.x_column)?;
        let y = parse_cell(&row, y_idx, row_no, &options.y_column)?;
        records.push(Record::new(x, y));
    }

    log::debug!("parsed {row_no} data rows");
    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn column_index(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| Error::DataFormat(format!("CSV missing '{name}' column")))
}

fn parse_cell(row: &ByteRecord, idx: usize, row_no: usize, col: &str) -> Result<f64> {
    let raw = row
        .get(idx)
        .ok_or_else(|| Error::DataFormat(format!("Row {row_no}: no value for '{col}'")))?;
    let text = latin1(raw);

    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::DataFormat(format!(
            "Row {row_no}, {col}: '{text}' is not a number"
        ))),
    }
}

/// ISO-8859-1 maps every byte to the code point of the same value.
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
