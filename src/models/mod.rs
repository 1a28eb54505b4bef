//! Domain model types for capacitated vehicle routing.
//!
//! Customers with demands, vehicle-type templates, routes instantiated from
//! those templates, the validated instance tying them together, and the
//! construction result.

mod customer;
mod instance;
mod route;
mod solution;
mod vehicle;

pub use customer::{Customer, GeoPoint};
pub use instance::{DepotRecord, Instance, InstanceData};
pub use route::{Route, DEPOT};
pub use solution::Construction;
pub use vehicle::VehicleType;
