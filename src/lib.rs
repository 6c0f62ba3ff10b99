//! # animerec
//!
//! Feature-based anime recommendations.
//!
//! animerec reads a CSV of titles with `Score`, `Rank`, `Popularity` and
//! `Members` columns, fills missing values with column means, standardizes each
//! feature, and returns the titles nearest to a query title by Euclidean
//! distance.
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! cargo install animerec
//! animerec --data processed_anime_dataset.csv --title "Bouken Ou Beet" -k 10
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use animerec::prelude::*;
//!
//! let results = get_recommendations("processed_anime_dataset.csv", "Bouken Ou Beet", 10)?;
//! for (i, rec) in results.iter().enumerate() {
//!     println!("{}. {} ({:.4})", i + 1, rec.name, rec.distance);
//! }
//! # Ok::<(), animerec::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! - `animerec-core` - Errors, feature vectors, mean imputation, standard scaling, k-NN index
//! - `animerec-dataset` - CSV loading and required-column validation
//! - `animerec-recommend` - Recommendation engine and report rendering
//!
//! ## Errors
//!
//! Every failure comes back as an [`Error`]; [`Error::kind`] groups them into
//! data-load, schema, not-found and invalid-argument failures.

// Re-export core types
pub use animerec_core::{
    Error, ErrorKind, Result,
    FeatureVector, MeanImputer, StandardScaler,
    Neighbor, NormalizedIndex,
};

// Re-export dataset
pub use animerec_dataset::{AnimeRecord, CsvOptions, Dataset};

// Re-export engine
pub use animerec_recommend::{
    get_recommendations, EngineConfig, NeighborResult, OutputFormat,
    RecommendationEngine, RecommendationResponse, DEFAULT_K,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Error, ErrorKind, Result,
        AnimeRecord, Dataset, CsvOptions,
        NormalizedIndex, Neighbor,
        RecommendationEngine, EngineConfig, NeighborResult,
        get_recommendations,
    };
}

/// Report rendering
pub mod report {
    pub use animerec_recommend::report::{format_text, render, OutputFormat};
}
