use crate::reader::{self, CsvOptions};
use crate::record::AnimeRecord;
use crate::schema::FEATURE_COLUMNS;
use ahash::AHashMap;
use animerec_core::{Error, NormalizedIndex, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// An ordered, immutable collection of titles.
///
/// Row order is the file order and is the identity used by the index; the
/// name lookup resolves duplicated titles to their first row.
#[derive(Debug, Clone)]
pub struct Dataset {
    source: Option<PathBuf>,
    records: Vec<AnimeRecord>,
    by_name: AHashMap<String, usize>,
}

impl Dataset {
    /// Load a CSV file with default options
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_options(path, &CsvOptions::default())
    }

    pub fn open_with_options(path: impl AsRef<Path>, options: &CsvOptions) -> Result<Self> {
        let path = path.as_ref();
        let records = reader::read_csv(path, options)?;
        if records.is_empty() {
            return Err(Error::data_load(path.display().to_string(), "no data rows"));
        }

        let mut dataset = Self::build(records);
        dataset.source = Some(path.to_path_buf());

        info!(
            path = %path.display(),
            rows = dataset.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Build from in-memory records
    pub fn from_records(records: Vec<AnimeRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::data_load("<memory>", "no data rows"));
        }
        Ok(Self::build(records))
    }

    fn build(records: Vec<AnimeRecord>) -> Self {
        let mut by_name = AHashMap::with_capacity(records.len());
        let mut duplicates = 0usize;
        for (row, record) in records.iter().enumerate() {
            // An empty name is a missing name and is never looked up
            if record.name.is_empty() {
                continue;
            }
            if by_name.contains_key(&record.name) {
                duplicates += 1;
            } else {
                by_name.insert(record.name.clone(), row);
            }
        }
        if duplicates > 0 {
            warn!(duplicates, "Dataset contains repeated titles; lookups use the first row");
        }

        Self {
            source: None,
            records,
            by_name,
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[AnimeRecord] {
        &self.records
    }

    pub fn get(&self, row: usize) -> Option<&AnimeRecord> {
        self.records.get(row)
    }

    /// First row whose name equals `title` exactly
    pub fn position(&self, title: &str) -> Option<usize> {
        self.by_name.get(title).copied()
    }

    /// Like [`Dataset::position`], failing with [`Error::NotFound`]
    pub fn find(&self, title: &str) -> Result<usize> {
        self.position(title)
            .ok_or_else(|| Error::NotFound(title.to_string()))
    }

    /// Raw feature rows, aligned with `records()`
    pub fn feature_rows(&self) -> Vec<[Option<f64>; 4]> {
        self.records.iter().map(AnimeRecord::features).collect()
    }

    /// Impute and standardize this dataset's features
    pub fn fit_index(&self) -> Result<NormalizedIndex> {
        NormalizedIndex::fit(&FEATURE_COLUMNS, &self.feature_rows())
    }
}
