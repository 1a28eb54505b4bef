//! Scaled Euclidean distance over latitude/longitude.

use serde::{Deserialize, Serialize};

use crate::models::GeoPoint;

/// Degrees → kilometres multiplier for the default metric.
///
/// Only a regional approximation: one degree is taken as 100 km in both
/// axes, which holds roughly near the equator over a small extent.
pub const DEFAULT_SCALE: f64 = 100.0;

/// A symmetric distance between two points.
pub trait DistanceMetric {
    /// Distance from `a` to `b`. Must be non-negative, symmetric and zero
    /// for identical points.
    fn distance(&self, a: &GeoPoint, b: &GeoPoint) -> f64;
}

/// Flat-plane Euclidean distance on (longitude, latitude), times a scale.
///
/// # Examples
///
/// ```
/// use fleet_routing::distance::{DistanceMetric, ScaledEuclidean};
/// use fleet_routing::models::GeoPoint;
///
/// let metric = ScaledEuclidean::default();
/// let a = GeoPoint::new(0.0, 0.0);
/// let b = GeoPoint::new(0.03, 0.04);
/// assert!((metric.distance(&a, &b) - 5.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledEuclidean {
    scale: f64,
}

impl ScaledEuclidean {
    /// Creates a metric with the given multiplier.
    ///
    /// The multiplier must be finite and positive for distances to stay
    /// non-negative; prefer [`ScaledEuclidean::try_new`] for untrusted input.
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    /// Creates a metric, or `None` if `scale` is not finite and positive.
    pub fn try_new(scale: f64) -> Option<Self> {
        (scale.is_finite() && scale > 0.0).then_some(Self { scale })
    }

    /// The degrees → distance-unit multiplier.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Default for ScaledEuclidean {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE)
    }
}

impl DistanceMetric for ScaledEuclidean {
    fn distance(&self, a: &GeoPoint, b: &GeoPoint) -> f64 {
        let d_lon = b.longitude() - a.longitude();
        let d_lat = b.latitude() - a.latitude();
        self.scale * d_lon.hypot(d_lat)
    }
}

/// Distance between two points under the default metric.
pub fn distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    ScaledEuclidean::default().distance(a, b)
}
