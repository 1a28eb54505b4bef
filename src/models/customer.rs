//! Customer and geographic point types.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::GeoPoint;
///
/// let p = GeoPoint::new(4.4184, 114.0932);
/// assert_eq!(p.latitude(), 4.4184);
/// assert!(p.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// A customer (or the depot) with a location and a demand.
///
/// The depot is a customer with zero demand; it anchors both ends of every
/// route.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Customer;
///
/// let depot = Customer::depot(0, 4.4184, 114.0932);
/// assert_eq!(depot.demand(), 0);
///
/// let c = Customer::new(2, 4.3976, 114.0049, 8);
/// assert_eq!(c.id(), 2);
/// assert_eq!(c.demand(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: usize,
    latitude: f64,
    longitude: f64,
    demand: u32,
}

impl Customer {
    /// Creates a new customer.
    pub fn new(id: usize, latitude: f64, longitude: f64, demand: u32) -> Self {
        Self {
            id,
            latitude,
            longitude,
            demand,
        }
    }

    /// Creates a depot at the given coordinates (demand 0).
    pub fn depot(id: usize, latitude: f64, longitude: f64) -> Self {
        Self::new(id, latitude, longitude, 0)
    }

    /// Unique identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Location of this customer.
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Units to deliver.
    pub fn demand(&self) -> u32 {
        self.demand
    }
}
