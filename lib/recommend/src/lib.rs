//! # animerec Recommend
//!
//! Title recommendations by k-nearest-neighbor search over standardized
//! numeric features.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV file   │────>│   Dataset   │────>│ Normalized  │────>│  Neighbor   │
//! │ (5 columns) │     │ (validated) │     │   Index     │     │  Results    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!                                          impute + z-score    k-NN, ties by row
//! ```
//!
//! ## Example
//!
//! ```rust
//! use animerec_dataset::{AnimeRecord, Dataset};
//! use animerec_recommend::RecommendationEngine;
//!
//! let dataset = Dataset::from_records(vec![
//!     AnimeRecord::complete("A", 8.0, 1.0, 100.0, 500.0),
//!     AnimeRecord::complete("B", 7.5, 5.0, 150.0, 400.0),
//!     AnimeRecord::complete("C", 8.0, 1.0, 100.0, 500.0),
//! ]).unwrap();
//!
//! let engine = RecommendationEngine::from_dataset(dataset).unwrap();
//! let results = engine.recommend("A", 2).unwrap();
//! assert_eq!(results[0].name, "A");
//! assert_eq!(results[1].name, "C");
//! ```

pub mod engine;
pub mod result;
pub mod report;

pub use engine::{get_recommendations, EngineConfig, RecommendationEngine, DEFAULT_K};
pub use result::{NeighborResult, RecommendationResponse};
pub use report::{format_text, render, OutputFormat};
