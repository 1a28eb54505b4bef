//! Distance model.
//!
//! A scaled flat-plane Euclidean approximation over latitude/longitude,
//! behind a [`DistanceMetric`] trait.

mod metric;

pub use metric::{distance, DistanceMetric, ScaledEuclidean, DEFAULT_SCALE};
