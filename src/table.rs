//! Sample table: fixed-format CSV parsing for IMU logger captures.
//!
//! The logger writes one header line followed by data rows of exactly seven
//! numeric fields: sample counter, raw accelerometer X/Y/Z, raw gyroscope
//! X/Y/Z. Parsing is strictly positional; header names are never inspected.
//! Consequently a file without a header line loses its first data row to the
//! header skip.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Number of fields every data row must carry.
pub const COLUMN_COUNT: usize = 7;

/// The seven fixed columns of a capture, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    SampleIndex,
    AccelX,
    AccelY,
    AccelZ,
    GyroX,
    GyroY,
    GyroZ,
}

impl Column {
    /// Positional index of this column within a data row.
    pub fn index(self) -> usize {
        match self {
            Column::SampleIndex => 0,
            Column::AccelX => 1,
            Column::AccelY => 2,
            Column::AccelZ => 3,
            Column::GyroX => 4,
            Column::GyroY => 5,
            Column::GyroZ => 6,
        }
    }
}

/// Errors raised while loading a capture. Any of these aborts the whole
/// load; there is no partial table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read capture: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: expected {COLUMN_COUNT} fields, got {found}")]
    ColumnCount { row: usize, found: usize },
    #[error("row {row}, field {field}: not a number: {value:?}")]
    Number {
        row: usize,
        field: usize,
        value: String,
    },
}

/// An immutable in-memory capture: rows are samples, columns are the seven
/// fixed fields of [`Column`].
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    rows: Vec<[f64; COLUMN_COUNT]>,
}

impl SampleTable {
    /// Load a capture from a CSV file, skipping the header line.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Parse a capture from any reader. The first line is consumed as the
    /// header regardless of its content.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows: Vec<[f64; COLUMN_COUNT]> = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            // 1-based data-row number for error reporting (header not counted).
            let row = i + 1;
            if record.len() != COLUMN_COUNT {
                return Err(LoadError::ColumnCount {
                    row,
                    found: record.len(),
                });
            }
            let mut fields = [0.0f64; COLUMN_COUNT];
            for (field, value) in record.iter().enumerate() {
                fields[field] = value.parse::<f64>().map_err(|_| LoadError::Number {
                    row,
                    field,
                    value: value.to_string(),
                })?;
            }
            rows.push(fields);
        }
        Ok(Self { rows })
    }

    /// Number of samples in the capture.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Copy one column out of the table.
    pub fn column(&self, col: Column) -> Vec<f64> {
        let idx = col.index();
        self.rows.iter().map(|row| row[idx]).collect()
    }

    /// Build the `[sample_index, value]` point series for one column,
    /// ready for plotting.
    pub fn series(&self, col: Column) -> Vec<[f64; 2]> {
        let idx = col.index();
        self.rows
            .iter()
            .map(|row| [row[Column::SampleIndex.index()], row[idx]])
            .collect()
    }
}
