//! Route (vehicle instance) type.

use super::VehicleType;

/// Location index of the depot within an [`Instance`](super::Instance).
pub const DEPOT: usize = 0;

/// One vehicle instance and the ordered stops it serves.
///
/// Stops are location indices into an [`Instance`](super::Instance). While
/// a route is being built it holds only customer stops; [`Route::close`]
/// anchors it at the depot on both ends.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Route, VehicleType, DEPOT};
///
/// let vt = VehicleType::new("Type A", 25, 1.2);
/// let mut route = Route::open(0, &vt);
/// route.push(3, 8);
/// route.push(1, 5);
/// route.close();
/// assert_eq!(route.stops(), &[DEPOT, 3, 1, DEPOT]);
/// assert_eq!(route.load(), 13);
/// assert_eq!(route.residual_capacity(), 12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    template: usize,
    vehicle_type: String,
    capacity: u32,
    cost_per_distance: f64,
    stops: Vec<usize>,
    load: u32,
    closed: bool,
}

impl Route {
    /// Instantiates an empty route from the template at catalog position
    /// `template`.
    pub fn open(template: usize, vehicle_type: &VehicleType) -> Self {
        Self {
            template,
            vehicle_type: vehicle_type.label().to_string(),
            capacity: vehicle_type.capacity(),
            cost_per_distance: vehicle_type.cost_per_distance(),
            stops: Vec::new(),
            load: 0,
            closed: false,
        }
    }

    /// Returns `true` if a demand fits in the remaining capacity.
    pub fn fits(&self, demand: u32) -> bool {
        self.residual_capacity() >= demand
    }

    /// Appends a customer stop and adds its demand to the load.
    ///
    /// Returns `false` and leaves the route unchanged if the route is closed
    /// or the demand does not fit.
    pub fn push(&mut self, location: usize, demand: u32) -> bool {
        if self.closed || !self.fits(demand) {
            return false;
        }
        self.stops.push(location);
        self.load += demand;
        true
    }

    /// Anchors the route at the depot on both ends. Idempotent.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.stops.insert(0, DEPOT);
        self.stops.push(DEPOT);
        self.closed = true;
    }

    /// Catalog position of the template this route was built from.
    pub fn template(&self) -> usize {
        self.template
    }

    /// Vehicle type label.
    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    /// Vehicle capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Cost per distance unit.
    pub fn cost_per_distance(&self) -> f64 {
        self.cost_per_distance
    }

    /// Ordered stops as location indices, depot included once closed.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Customer stops only, in visit order.
    pub fn customers(&self) -> &[usize] {
        if self.closed {
            &self.stops[1..self.stops.len() - 1]
        } else {
            &self.stops
        }
    }

    /// Accumulated demand.
    pub fn load(&self) -> u32 {
        self.load
    }

    /// Capacity minus load.
    pub fn residual_capacity(&self) -> u32 {
        self.capacity - self.load
    }

    /// Whether the depot anchors have been added.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
