//! # animerec Dataset
//!
//! Loading and validation of tabular title data.
//!
//! The input is delimited text with a header row containing at least
//! `Name, Score, Rank, Popularity, Members`. Other columns are ignored and the
//! numeric columns may contain empty cells.
//!
//! ```rust
//! use animerec_dataset::{reader, CsvOptions, Dataset};
//!
//! let text = "Name,Score,Rank,Popularity,Members\nTrigun,8.22,,255,743\n";
//! let records = reader::read_from(text.as_bytes(), "inline", &CsvOptions::default()).unwrap();
//! let dataset = Dataset::from_records(records).unwrap();
//!
//! assert_eq!(dataset.find("Trigun").unwrap(), 0);
//! assert_eq!(dataset.records()[0].rank, None);
//! ```

pub mod schema;
pub mod record;
pub mod reader;
pub mod dataset;

pub use schema::{ColumnLayout, FEATURE_COLUMNS, NAME_COLUMN, REQUIRED_COLUMNS};
pub use record::AnimeRecord;
pub use reader::{read_csv, CsvOptions};
pub use dataset::Dataset;
