//! # animerec Core
//!
//! Core library for the animerec recommender.
//!
//! This crate provides the numeric building blocks:
//!
//! - [`FeatureVector`] - A row in the standardized feature space
//! - [`MeanImputer`] - Fills missing cells with the column mean of observed values
//! - [`StandardScaler`] - Z-score standardization with population statistics
//! - [`NormalizedIndex`] - Fit once, then exact Euclidean k-NN queries
//!
//! ## Example
//!
//! ```rust
//! use animerec_core::NormalizedIndex;
//!
//! let columns = ["Score", "Members"];
//! let rows = vec![
//!     vec![Some(8.0), Some(500.0)],
//!     vec![Some(7.5), None],
//!     vec![Some(8.0), Some(500.0)],
//! ];
//!
//! let index = NormalizedIndex::fit(&columns, &rows).unwrap();
//! let neighbors = index.query_row(0, 2).unwrap();
//! assert_eq!(neighbors[0].row, 0);
//! assert_eq!(neighbors[1].row, 2);
//! ```

pub mod error;
pub mod vector;
pub mod distance;
pub mod impute;
pub mod scaler;
pub mod index;

pub use error::{Error, ErrorKind, Result};
pub use vector::FeatureVector;
pub use impute::MeanImputer;
pub use scaler::StandardScaler;
pub use index::{Neighbor, NormalizedIndex};
