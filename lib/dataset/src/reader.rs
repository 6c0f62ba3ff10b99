//! CSV reader for title datasets
//!
//! Reads the header, resolves the required columns, then coerces the four
//! numeric columns cell by cell. Rows shorter than the header are padded with
//! missing cells; rows longer than the header are rejected.

use crate::record::AnimeRecord;
use crate::schema::{ColumnLayout, FEATURE_COLUMNS};
use animerec_core::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Cell values treated as missing, compared after trimming
pub const MISSING_MARKERS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "<NA>",
    "#N/A", "#NA",
];

#[derive(Debug, Clone)]
pub struct CsvOptions {
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Read every record from the CSV file at `path`.
pub fn read_csv(path: &Path, options: &CsvOptions) -> Result<Vec<AnimeRecord>> {
    let source = path.display().to_string();
    if !path.exists() {
        return Err(Error::data_load(source, "file not found"));
    }

    let file = File::open(path).map_err(|e| Error::data_load(&source, e))?;
    read_from(BufReader::new(file), &source, options)
}

/// Read every record from any reader; `source` labels errors.
pub fn read_from<R: Read>(reader: R, source: &str, options: &CsvOptions) -> Result<Vec<AnimeRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| Error::data_load(source, e))?
        .clone();
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(Error::data_load(source, "no columns to parse"));
    }

    let layout = ColumnLayout::resolve(headers.iter())?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(|e| Error::data_load(source, e))?;
        let row = i + 1;

        if record.len() > layout.width {
            let line = record.position().map(|p| p.line()).unwrap_or(row as u64 + 1);
            return Err(Error::data_load(
                source,
                format!(
                    "expected {} fields in line {}, saw {}",
                    layout.width,
                    line,
                    record.len()
                ),
            ));
        }

        let field = |idx: usize| record.get(idx).unwrap_or("");
        let mut features = [None; 4];
        for (slot, (&idx, column)) in features
            .iter_mut()
            .zip(layout.features.iter().zip(FEATURE_COLUMNS))
        {
            *slot = parse_numeric(column, row, field(idx))?;
        }

        let [score, rank, popularity, members] = features;
        records.push(AnimeRecord::new(
            field(layout.name),
            score,
            rank,
            popularity,
            members,
        ));
    }

    Ok(records)
}

pub fn is_missing(raw: &str) -> bool {
    MISSING_MARKERS.contains(&raw.trim())
}

/// Coerce one numeric cell; missing markers become `None`.
pub fn parse_numeric(column: &str, row: usize, raw: &str) -> Result<Option<f64>> {
    if is_missing(raw) {
        return Ok(None);
    }

    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        // "inf" and "NaN" spellings parse but cannot be standardized
        _ => Err(Error::InvalidValue {
            column: column.to_string(),
            row,
            value: raw.to_string(),
        }),
    }
}
