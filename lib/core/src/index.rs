//! Normalized feature index with exact Euclidean k-NN lookup
//!
//! `fit` imputes and standardizes the raw feature rows once; `query` scans every
//! stored vector and returns the `k` closest rows. Row positions are kept as
//! given, so callers can map a [`Neighbor::row`] straight back to their records.

use crate::impute::MeanImputer;
use crate::scaler::StandardScaler;
use crate::vector::FeatureVector;
use crate::{Error, Result};
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

/// Above this many rows the distance scan runs on the rayon pool
const PARALLEL_SCAN_THRESHOLD: usize = 50_000;

/// A row position and its distance from the query vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    pub row: usize,
    pub distance: f64,
}

impl Neighbor {
    #[inline]
    fn sort_key(&self) -> (OrderedFloat<f64>, usize) {
        (OrderedFloat(self.distance), self.row)
    }
}

/// Imputed, standardized feature rows plus the statistics that define the space
#[derive(Debug, Clone)]
pub struct NormalizedIndex {
    imputer: MeanImputer,
    scaler: StandardScaler,
    vectors: Vec<FeatureVector>,
}

impl NormalizedIndex {
    /// Impute missing cells with column means, then standardize every column.
    pub fn fit<R: AsRef<[Option<f64>]>>(columns: &[&str], rows: &[R]) -> Result<Self> {
        let imputer = MeanImputer::fit(columns, rows)?;
        let filled = imputer.transform(rows)?;
        let scaler = StandardScaler::fit(&filled)?;

        let vectors = filled
            .iter()
            .map(|row| scaler.transform_row(row).map(FeatureVector::new))
            .collect::<Result<Vec<_>>>()?;

        if imputer.total_missing() > 0 {
            warn!(
                imputed = imputer.total_missing(),
                per_column = ?imputer.missing_counts(),
                "Filled missing feature cells with column means"
            );
        }

        debug!(
            rows = vectors.len(),
            imputed = imputer.total_missing(),
            mean = ?scaler.mean(),
            scale = ?scaler.scale(),
            "Fitted normalized index"
        );

        Ok(Self {
            imputer,
            scaler,
            vectors,
        })
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.scaler.dim()
    }

    pub fn imputer(&self) -> &MeanImputer {
        &self.imputer
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    /// Standardized vector stored for `row`
    pub fn vector(&self, row: usize) -> Option<&FeatureVector> {
        self.vectors.get(row)
    }

    /// Project a raw feature row into the fitted space.
    ///
    /// Missing cells take the fitted column means, as during `fit`.
    pub fn transform(&self, raw: &[Option<f64>]) -> Result<FeatureVector> {
        let filled = self.imputer.transform_row(raw)?;
        Ok(FeatureVector::new(self.scaler.transform_row(&filled)?))
    }

    /// The `k` nearest stored rows to `query`, closest first.
    ///
    /// Ties on distance go to the lower row index. `k` must be between 1 and
    /// the number of indexed rows.
    pub fn query(&self, query: &FeatureVector, k: usize) -> Result<Vec<Neighbor>> {
        if k == 0 || k > self.len() {
            return Err(Error::InvalidNeighborCount {
                k,
                rows: self.len(),
            });
        }
        if query.dim() != self.dim() {
            return Err(Error::InvalidDimension {
                expected: self.dim(),
                actual: query.dim(),
            });
        }

        let scan = |(row, v): (usize, &FeatureVector)| Neighbor {
            row,
            distance: v.l2_distance(query),
        };

        let mut neighbors: Vec<Neighbor> = if self.len() >= PARALLEL_SCAN_THRESHOLD {
            self.vectors.par_iter().enumerate().map(scan).collect()
        } else {
            self.vectors.iter().enumerate().map(scan).collect()
        };

        if k < neighbors.len() {
            neighbors.select_nth_unstable_by_key(k - 1, Neighbor::sort_key);
            neighbors.truncate(k);
        }
        neighbors.sort_unstable_by_key(Neighbor::sort_key);

        Ok(neighbors)
    }

    /// Convenience for `query(self.vector(row), k)`
    pub fn query_row(&self, row: usize, k: usize) -> Result<Vec<Neighbor>> {
        let vector = self.vectors.get(row).ok_or(Error::RowOutOfRange {
            row,
            rows: self.len(),
        })?;
        self.query(vector, k)
    }
}
