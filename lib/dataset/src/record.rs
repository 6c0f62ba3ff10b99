use serde::{Deserialize, Serialize};

/// One title with its attributes as read from the source file.
///
/// Missing numeric cells stay `None`; imputation happens later, in the
/// normalized index, and never rewrites the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeRecord {
    pub name: String,
    pub score: Option<f64>,
    pub rank: Option<f64>,
    pub popularity: Option<f64>,
    pub members: Option<f64>,
}

impl AnimeRecord {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        score: Option<f64>,
        rank: Option<f64>,
        popularity: Option<f64>,
        members: Option<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            score,
            rank,
            popularity,
            members,
        }
    }

    /// Record with every attribute present
    #[must_use]
    pub fn complete(name: impl Into<String>, score: f64, rank: f64, popularity: f64, members: f64) -> Self {
        Self::new(name, Some(score), Some(rank), Some(popularity), Some(members))
    }

    /// Raw features in `FEATURE_COLUMNS` order
    #[inline]
    pub fn features(&self) -> [Option<f64>; 4] {
        [self.score, self.rank, self.popularity, self.members]
    }

    pub fn has_missing(&self) -> bool {
        self.features().iter().any(Option::is_none)
    }
}
