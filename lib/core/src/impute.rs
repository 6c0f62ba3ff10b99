//! Mean imputation for numeric feature columns
//!
//! Each column's fill value is the arithmetic mean of its observed (non-missing)
//! cells. Rows are slices of `Option<f64>` where `None` marks a missing cell.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Per-column means learned from the observed values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeanImputer {
    columns: Vec<String>,
    means: Vec<f64>,
    /// Number of cells filled per column during `fit`
    missing: Vec<usize>,
}

impl MeanImputer {
    /// Learn column means from `rows`.
    ///
    /// `columns` names the features and fixes the expected row width. A column
    /// without a single observed value cannot be imputed and fails with
    /// [`Error::EmptyColumn`].
    pub fn fit<R: AsRef<[Option<f64>]>>(columns: &[&str], rows: &[R]) -> Result<Self> {
        let dim = columns.len();
        let mut sums = vec![0.0f64; dim];
        let mut counts = vec![0usize; dim];

        for row in rows {
            let row = row.as_ref();
            if row.len() != dim {
                return Err(Error::InvalidDimension {
                    expected: dim,
                    actual: row.len(),
                });
            }
            for (j, cell) in row.iter().enumerate() {
                if let Some(v) = cell {
                    sums[j] += v;
                    counts[j] += 1;
                }
            }
        }

        let mut means = Vec::with_capacity(dim);
        for j in 0..dim {
            if counts[j] == 0 {
                return Err(Error::EmptyColumn(columns[j].to_string()));
            }
            let mean = sums[j] / counts[j] as f64;
            if !mean.is_finite() {
                return Err(Error::NonFiniteStatistic {
                    column: j,
                    statistic: "mean",
                });
            }
            means.push(mean);
        }

        let missing = counts.iter().map(|&c| rows.len() - c).collect();

        Ok(Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            means,
            missing,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Missing-cell counts per column seen during `fit`
    pub fn missing_counts(&self) -> &[usize] {
        &self.missing
    }

    pub fn total_missing(&self) -> usize {
        self.missing.iter().sum()
    }

    /// Fill the gaps in one row with the fitted means
    pub fn transform_row(&self, row: &[Option<f64>]) -> Result<Vec<f64>> {
        if row.len() != self.means.len() {
            return Err(Error::InvalidDimension {
                expected: self.means.len(),
                actual: row.len(),
            });
        }

        Ok(row
            .iter()
            .zip(&self.means)
            .map(|(cell, mean)| cell.unwrap_or(*mean))
            .collect())
    }

    pub fn transform<R: AsRef<[Option<f64>]>>(&self, rows: &[R]) -> Result<Vec<Vec<f64>>> {
        rows.iter().map(|r| self.transform_row(r.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLS: [&str; 2] = ["Score", "Members"];

    #[test]
    fn test_fill_with_observed_mean() {
        let rows = vec![
            vec![Some(8.0), Some(100.0)],
            vec![None, Some(300.0)],
            vec![Some(6.0), None],
        ];
        let imputer = MeanImputer::fit(&COLS, &rows).unwrap();
        assert_eq!(imputer.means(), &[7.0, 200.0]);
        assert_eq!(imputer.missing_counts(), &[1, 1]);

        let filled = imputer.transform(&rows).unwrap();
        assert_eq!(filled[1], vec![7.0, 300.0]);
        assert_eq!(filled[2], vec![6.0, 200.0]);
    }

    #[test]
    fn test_imputed_mean_matches_excluding_row() {
        let full = vec![
            vec![Some(1.0), Some(2.0)],
            vec![Some(4.0), Some(5.0)],
            vec![Some(10.0), Some(11.0)],
        ];
        let mut holed = full.clone();
        holed[2][0] = None;

        let imputer = MeanImputer::fit(&COLS, &holed).unwrap();
        // Mean over the two remaining rows only
        assert!((imputer.means()[0] - 2.5).abs() < 1e-12);

        // Filling with the mean leaves the column mean unchanged
        let filled = imputer.transform(&holed).unwrap();
        let col_mean: f64 = filled.iter().map(|r| r[0]).sum::<f64>() / 3.0;
        assert!((col_mean - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_all_missing_column() {
        let rows = vec![vec![Some(1.0), None], vec![Some(2.0), None]];
        let err = MeanImputer::fit(&COLS, &rows).unwrap_err();
        assert!(matches!(err, Error::EmptyColumn(ref c) if c == "Members"));
    }

    #[test]
    fn test_overflowing_mean() {
        let rows = vec![vec![Some(1.0), Some(1e308)], vec![Some(2.0), Some(1e308)]];
        assert!(matches!(
            MeanImputer::fit(&COLS, &rows),
            Err(Error::NonFiniteStatistic { column: 1, statistic: "mean" })
        ));
    }

    #[test]
    fn test_ragged_row() {
        let rows = vec![vec![Some(1.0)]];
        assert!(matches!(
            MeanImputer::fit(&COLS, &rows),
            Err(Error::InvalidDimension { expected: 2, actual: 1 })
        ));
    }
}
