//! Problem instance: depot, customers and the vehicle-type catalog.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Customer, VehicleType, DEPOT};
use crate::error::RoutingError;

/// Depot input record. Demand may be omitted and must be zero if given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepotRecord {
    /// Unique identifier.
    pub id: usize,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Demand; anything other than zero is rejected.
    #[serde(default)]
    pub demand: u32,
}

impl From<DepotRecord> for Customer {
    fn from(record: DepotRecord) -> Self {
        Customer::new(record.id, record.latitude, record.longitude, record.demand)
    }
}

/// Input records as produced by a loader.
///
/// Converted into a validated [`Instance`] through `TryFrom`. Customer
/// records must carry a demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceData {
    /// Depot record.
    pub depot: DepotRecord,
    /// Customers in input order.
    pub customers: Vec<Customer>,
    /// Vehicle-type catalog in priority order.
    pub vehicle_types: Vec<VehicleType>,
}

/// A validated routing instance.
///
/// Locations are indexed with the depot at [`DEPOT`] (0) and customers at
/// `1..=n` in input order. Routes refer to locations by these indices.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Customer, Instance, VehicleType};
///
/// let instance = Instance::new(
///     Customer::depot(0, 4.4184, 114.0932),
///     vec![Customer::new(1, 4.3555, 113.9777, 5)],
///     vec![VehicleType::new("Type A", 25, 1.2)],
/// ).unwrap();
/// assert_eq!(instance.num_customers(), 1);
/// assert_eq!(instance.location(1).id(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    locations: Vec<Customer>,
    vehicle_types: Vec<VehicleType>,
}

impl Instance {
    /// Validates and builds an instance.
    ///
    /// Rejects duplicate ids (a customer may not reuse the depot id), a
    /// depot with demand, non-finite coordinates and invalid templates.
    pub fn new(
        depot: Customer,
        customers: Vec<Customer>,
        vehicle_types: Vec<VehicleType>,
    ) -> Result<Self, RoutingError> {
        if depot.demand() != 0 {
            return Err(RoutingError::DepotDemand {
                demand: depot.demand(),
            });
        }

        let mut locations = Vec::with_capacity(customers.len() + 1);
        locations.push(depot);
        locations.extend(customers);

        let mut seen = HashSet::with_capacity(locations.len());
        for loc in &locations {
            if !seen.insert(loc.id()) {
                return Err(RoutingError::DuplicateId { id: loc.id() });
            }
            if !loc.location().is_finite() {
                return Err(RoutingError::NonFiniteLocation { id: loc.id() });
            }
        }

        if let Some(vt) = vehicle_types.iter().find(|vt| !vt.is_valid()) {
            return Err(RoutingError::InvalidVehicleType {
                label: vt.label().to_string(),
            });
        }

        Ok(Self {
            locations,
            vehicle_types,
        })
    }

    /// The depot.
    pub fn depot(&self) -> &Customer {
        &self.locations[DEPOT]
    }

    /// Location at `index` (0 = depot).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn location(&self, index: usize) -> &Customer {
        &self.locations[index]
    }

    /// All locations, depot first.
    pub fn locations(&self) -> &[Customer] {
        &self.locations
    }

    /// Customers only, in input order.
    pub fn customers(&self) -> &[Customer] {
        &self.locations[1..]
    }

    /// Location indices of the customers (`1..=n`).
    pub fn customer_indices(&self) -> impl Iterator<Item = usize> {
        1..self.locations.len()
    }

    /// Number of customers (excluding the depot).
    pub fn num_customers(&self) -> usize {
        self.locations.len() - 1
    }

    /// Number of locations including the depot.
    pub fn num_locations(&self) -> usize {
        self.locations.len()
    }

    /// Vehicle-type catalog in priority order.
    pub fn vehicle_types(&self) -> &[VehicleType] {
        &self.vehicle_types
    }

    /// Total demand across all customers.
    pub fn total_demand(&self) -> u64 {
        self.customers().iter().map(|c| u64::from(c.demand())).sum()
    }
}

impl TryFrom<InstanceData> for Instance {
    type Error = RoutingError;

    fn try_from(data: InstanceData) -> Result<Self, Self::Error> {
        Instance::new(data.depot.into(), data.customers, data.vehicle_types)
    }
}
