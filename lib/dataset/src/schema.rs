//! Required columns and their positions in a header row

use animerec_core::{Error, Result};

pub const NAME_COLUMN: &str = "Name";

/// Numeric feature columns, in feature-vector order
pub const FEATURE_COLUMNS: [&str; 4] = ["Score", "Rank", "Popularity", "Members"];

pub const REQUIRED_COLUMNS: [&str; 5] = ["Name", "Score", "Rank", "Popularity", "Members"];

/// Positions of the required columns within a header row.
///
/// Column order in the file is irrelevant and extra columns are ignored. If a
/// header repeats, its first occurrence wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name: usize,
    pub features: [usize; 4],
    /// Total number of header fields
    pub width: usize,
}

impl ColumnLayout {
    /// Locate every required column, or fail with [`Error::Schema`] listing
    /// all of the absent ones.
    pub fn resolve<'a, I>(headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let headers: Vec<&str> = headers.into_iter().collect();
        let position = |column: &str| headers.iter().position(|h| *h == column);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|&&c| position(c).is_none())
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(Error::Schema { missing });
        }

        let mut features = [0usize; 4];
        for (slot, column) in features.iter_mut().zip(FEATURE_COLUMNS) {
            *slot = position(column).ok_or_else(|| Error::Schema {
                missing: vec![column.to_string()],
            })?;
        }
        let name = position(NAME_COLUMN).ok_or_else(|| Error::Schema {
            missing: vec![NAME_COLUMN.to_string()],
        })?;

        Ok(Self {
            name,
            features,
            width: headers.len(),
        })
    }
}
