use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load '{path}': {reason}")]
    DataLoad { path: String, reason: String },

    #[error("Invalid value in column '{column}' at row {row}: {value:?}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Column '{0}' has no numeric values to compute a mean from")]
    EmptyColumn(String),

    #[error("Missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("Title '{0}' not found in the dataset")]
    NotFound(String),

    #[error("Invalid neighbor count: k={k} must be between 1 and {rows}")]
    InvalidNeighborCount { k: usize, rows: usize },

    #[error("Row {row} is out of range for {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Feature column {column} has a non-finite {statistic}")]
    NonFiniteStatistic {
        column: usize,
        statistic: &'static str,
    },
}

/// Coarse failure class, for callers that branch on cause rather than detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DataLoad,
    Schema,
    NotFound,
    InvalidArgument,
}

impl Error {
    pub fn data_load(path: impl Into<String>, reason: impl ToString) -> Self {
        Error::DataLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::DataLoad { .. }
            | Error::InvalidValue { .. }
            | Error::EmptyColumn(_)
            | Error::NonFiniteStatistic { .. } => ErrorKind::DataLoad,
            Error::Schema { .. } => ErrorKind::Schema,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::InvalidNeighborCount { .. }
            | Error::RowOutOfRange { .. }
            | Error::InvalidDimension { .. } => ErrorKind::InvalidArgument,
        }
    }
}
