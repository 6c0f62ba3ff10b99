//! Z-score standardization
//!
//! The standard score of a value x is `(x - mean) / std`, with the population
//! standard deviation fit on the full dataset. A column with zero variance
//! keeps a scale of 1.0 so its standardized values collapse to 0 instead of
//! dividing by zero.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Per-column mean and scale learned during `fit`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Fit column means and population standard deviations.
    pub fn fit<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(Error::InvalidDimension {
                expected: 1,
                actual: 0,
            });
        };
        let dim = first.as_ref().len();
        let n = rows.len() as f64;

        let mut mean = vec![0.0f64; dim];
        for row in rows {
            let row = row.as_ref();
            if row.len() != dim {
                return Err(Error::InvalidDimension {
                    expected: dim,
                    actual: row.len(),
                });
            }
            for (m, v) in mean.iter_mut().zip(row) {
                *m += v;
            }
        }
        for m in &mut mean {
            *m /= n;
        }

        if let Some(column) = mean.iter().position(|m| !m.is_finite()) {
            return Err(Error::NonFiniteStatistic {
                column,
                statistic: "mean",
            });
        }

        // Two-pass variance
        let mut var = vec![0.0f64; dim];
        for row in rows {
            for ((acc, v), m) in var.iter_mut().zip(row.as_ref()).zip(&mean) {
                let d = v - m;
                *acc += d * d;
            }
        }

        let mut scale = Vec::with_capacity(dim);
        for (column, v) in var.into_iter().enumerate() {
            let std = (v / n).sqrt();
            if !std.is_finite() {
                return Err(Error::NonFiniteStatistic {
                    column,
                    statistic: "standard deviation",
                });
            }
            scale.push(if std > 0.0 { std } else { 1.0 });
        }

        Ok(Self { mean, scale })
    }

    #[must_use]
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Standard deviation per column (1.0 for constant columns)
    #[must_use]
    pub fn scale(&self) -> &[f64] {
        &self.scale
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.mean.len()
    }

    pub fn transform_row(&self, row: &[f64]) -> Result<Vec<f64>> {
        if row.len() != self.dim() {
            return Err(Error::InvalidDimension {
                expected: self.dim(),
                actual: row.len(),
            });
        }

        Ok(row
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (m, s))| (x - m) / s)
            .collect())
    }

    /// Map a standardized row back to original units.
    pub fn inverse_transform_row(&self, row: &[f64]) -> Result<Vec<f64>> {
        if row.len() != self.dim() {
            return Err(Error::InvalidDimension {
                expected: self.dim(),
                actual: row.len(),
            });
        }

        Ok(row
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(z, (m, s))| z * s + m)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_stats(rows: &[Vec<f64>], j: usize) -> (f64, f64) {
        let n = rows.len() as f64;
        let mean = rows.iter().map(|r| r[j]).sum::<f64>() / n;
        let var = rows.iter().map(|r| (r[j] - mean).powi(2)).sum::<f64>() / n;
        (mean, var.sqrt())
    }

    #[test]
    fn test_standardized_columns_have_zero_mean_unit_std() {
        let rows = vec![
            vec![8.0, 1.0, 100.0, 500.0],
            vec![7.5, 5.0, 150.0, 400.0],
            vec![6.1, 90.0, 3000.0, 12.0],
            vec![9.2, 2.0, 20.0, 2_000_000.0],
        ];
        let scaler = StandardScaler::fit(&rows).unwrap();
        let scaled: Vec<Vec<f64>> = rows
            .iter()
            .map(|r| scaler.transform_row(r).unwrap())
            .collect();

        for j in 0..4 {
            let (mean, std) = column_stats(&scaled, j);
            assert!(mean.abs() < 1e-9, "column {} mean {}", j, mean);
            assert!((std - 1.0).abs() < 1e-9, "column {} std {}", j, std);
        }
    }

    #[test]
    fn test_population_std() {
        // Population std of [1, 3] is 1.0 (sample std would be sqrt(2))
        let rows = vec![vec![1.0], vec![3.0]];
        let scaler = StandardScaler::fit(&rows).unwrap();
        assert_eq!(scaler.mean(), &[2.0]);
        assert!((scaler.scale()[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_column_scale_is_one() {
        let rows = vec![vec![5.0, 1.0], vec![5.0, 2.0]];
        let scaler = StandardScaler::fit(&rows).unwrap();
        assert_eq!(scaler.scale()[0], 1.0);
        assert_eq!(scaler.transform_row(&[5.0, 1.0]).unwrap()[0], 0.0);
    }

    #[test]
    fn test_inverse_transform() {
        let rows = vec![vec![1.0, 10.0], vec![2.0, 20.0], vec![4.0, 70.0]];
        let scaler = StandardScaler::fit(&rows).unwrap();
        let z = scaler.transform_row(&rows[2]).unwrap();
        let back = scaler.inverse_transform_row(&z).unwrap();
        assert!((back[0] - 4.0).abs() < 1e-9);
        assert!((back[1] - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_fit() {
        let rows: Vec<Vec<f64>> = Vec::new();
        assert!(StandardScaler::fit(&rows).is_err());
    }

    #[test]
    fn test_overflowing_mean_is_rejected() {
        let rows = vec![vec![1.0, 1e308], vec![2.0, 1e308]];
        assert!(matches!(
            StandardScaler::fit(&rows),
            Err(Error::NonFiniteStatistic { column: 1, statistic: "mean" })
        ));
    }

    #[test]
    fn test_overflowing_variance_is_rejected() {
        // Mean is 0 but each squared deviation overflows
        let rows = vec![vec![1e200], vec![-1e200]];
        assert!(matches!(
            StandardScaler::fit(&rows),
            Err(Error::NonFiniteStatistic {
                column: 0,
                statistic: "standard deviation"
            })
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 5.0]];
        let scaler = StandardScaler::fit(&rows).unwrap();
        let json = serde_json::to_string(&scaler).unwrap();
        let parsed: StandardScaler = serde_json::from_str(&json).unwrap();
        assert_eq!(scaler, parsed);
    }
}
