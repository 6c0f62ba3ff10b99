//! Recommendation results and their serializable response envelope

use animerec_core::Neighbor;
use animerec_dataset::AnimeRecord;
use serde::{Deserialize, Serialize};

/// A recommended title: original attribute values plus the distance from the
/// query title in standardized feature space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborResult {
    pub name: String,
    pub score: Option<f64>,
    pub rank: Option<f64>,
    pub popularity: Option<f64>,
    pub members: Option<f64>,
    pub distance: f64,
}

impl NeighborResult {
    /// Pair a dataset record with its neighbor distance
    pub fn from_record(record: &AnimeRecord, neighbor: &Neighbor) -> Self {
        Self {
            name: record.name.clone(),
            score: record.score,
            rank: record.rank,
            popularity: record.popularity,
            members: record.members,
            distance: neighbor.distance,
        }
    }
}

/// Response for one query title
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub query: String,
    pub k: usize,
    pub results: Vec<NeighborResult>,
}

impl RecommendationResponse {
    pub fn new(query: impl Into<String>, results: Vec<NeighborResult>) -> Self {
        Self {
            query: query.into(),
            k: results.len(),
            results,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
