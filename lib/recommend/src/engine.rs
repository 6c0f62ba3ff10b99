use crate::result::NeighborResult;
use animerec_core::{Error, NormalizedIndex, Result};
use animerec_dataset::{CsvOptions, Dataset};
use std::path::Path;
use tracing::{debug, info};

pub const DEFAULT_K: usize = 10;

/// Configuration for building an engine from a file
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub csv: CsvOptions,
    /// Number of neighbors returned when the caller does not ask for a count
    pub k: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            csv: CsvOptions::default(),
            k: DEFAULT_K,
        }
    }
}

/// A loaded dataset with its fitted normalized index.
///
/// Fitting happens once at construction; every `recommend` call reuses the
/// same standardized space.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    config: EngineConfig,
    dataset: Dataset,
    index: NormalizedIndex,
}

impl RecommendationEngine {
    /// Load, validate and fit the CSV file at `path`
    pub fn open(path: impl AsRef<Path>, config: EngineConfig) -> Result<Self> {
        let dataset = Dataset::open_with_options(path, &config.csv)?;
        Self::with_config(dataset, config)
    }

    pub fn from_dataset(dataset: Dataset) -> Result<Self> {
        Self::with_config(dataset, EngineConfig::default())
    }

    fn with_config(dataset: Dataset, config: EngineConfig) -> Result<Self> {
        let index = dataset.fit_index()?;
        info!(
            rows = index.len(),
            imputed = index.imputer().total_missing(),
            "Engine ready"
        );
        Ok(Self {
            config,
            dataset,
            index,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn index(&self) -> &NormalizedIndex {
        &self.index
    }

    /// Recommendations for `title` using the configured `k`
    pub fn recommend_default(&self, title: &str) -> Result<Vec<NeighborResult>> {
        self.recommend(title, self.config.k)
    }

    /// The `k` titles closest to `title`, nearest first.
    ///
    /// The query title itself is part of the candidate set, so it normally
    /// comes back first with distance 0.
    pub fn recommend(&self, title: &str, k: usize) -> Result<Vec<NeighborResult>> {
        let row = self.dataset.find(title)?;
        let neighbors = self.index.query_row(row, k)?;
        debug!(title, row, k, "Queried neighbors");

        neighbors
            .iter()
            .map(|n| -> Result<NeighborResult> {
                let record = self.dataset.get(n.row).ok_or(Error::RowOutOfRange {
                    row: n.row,
                    rows: self.dataset.len(),
                })?;
                Ok(NeighborResult::from_record(record, n))
            })
            .collect()
    }
}

/// Load `path`, fit, and return the `k` titles closest to `title`.
pub fn get_recommendations(
    path: impl AsRef<Path>,
    title: &str,
    k: usize,
) -> Result<Vec<NeighborResult>> {
    let config = EngineConfig {
        k,
        ..EngineConfig::default()
    };
    RecommendationEngine::open(path, config)?.recommend_default(title)
}
