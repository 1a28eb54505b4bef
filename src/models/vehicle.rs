//! Vehicle-type templates.

use serde::{Deserialize, Serialize};

/// A catalog entry from which routes are instantiated on demand.
///
/// A template is not a vehicle: every route built from it is a separate
/// vehicle instance. Without a limit the supply of each type is unbounded.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::VehicleType;
///
/// let v = VehicleType::new("Type A", 25, 1.2);
/// assert_eq!(v.capacity(), 25);
/// assert!(v.limit().is_none());
///
/// let bounded = VehicleType::new("Type B", 30, 1.5).with_limit(2);
/// assert_eq!(bounded.limit(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleType {
    label: String,
    capacity: u32,
    cost_per_distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

impl VehicleType {
    /// Creates an unlimited template.
    pub fn new(label: impl Into<String>, capacity: u32, cost_per_distance: f64) -> Self {
        Self {
            label: label.into(),
            capacity,
            cost_per_distance,
            limit: None,
        }
    }

    /// Caps how many routes may be built from this template.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Type label, e.g. `"Type A"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Maximum load per vehicle.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Cost per distance unit traveled.
    pub fn cost_per_distance(&self) -> f64 {
        self.cost_per_distance
    }

    /// Maximum number of instances, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns `true` if another instance may be created given how many
    /// already exist.
    pub fn is_available(&self, in_use: usize) -> bool {
        self.limit.map_or(true, |max| in_use < max)
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.capacity > 0 && self.cost_per_distance.is_finite() && self.cost_per_distance >= 0.0
    }
}
