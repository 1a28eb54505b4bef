//! # fleet-routing
//!
//! Capacitated vehicle routing construction for a single depot and a
//! catalog of vehicle types. Customers are packed into routes under
//! capacity limits, vehicles are instantiated from type templates on
//! demand, and every route is costed as a depot round trip.
//!
//! ## Modules
//!
//! - [`models`] — Customers, vehicle-type templates, routes, instances
//! - [`distance`] — Scaled Euclidean distance over latitude/longitude
//! - [`constructive`] — First-fit-decreasing and nearest-neighbor construction
//! - [`evaluation`] — Route distance and cost evaluation
//! - [`planner`] — Feasibility check and fleet report
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use fleet_routing::models::{Customer, Instance, VehicleType};
//! use fleet_routing::planner::{plan, PlannerConfig};
//!
//! let instance = Instance::new(
//!     Customer::depot(0, 4.4184, 114.0932),
//!     vec![
//!         Customer::new(1, 4.3555, 113.9777, 5),
//!         Customer::new(2, 4.3976, 114.0049, 8),
//!         Customer::new(3, 4.3163, 114.0764, 3),
//!     ],
//!     vec![
//!         VehicleType::new("Type A", 25, 1.2),
//!         VehicleType::new("Type B", 30, 1.5),
//!     ],
//! )?;
//!
//! let plan = plan(&instance, &PlannerConfig::default())?;
//! assert_eq!(plan.routes[0].stops, vec![0, 2, 1, 3, 0]);
//! println!("{plan}");
//! # Ok::<(), fleet_routing::error::RoutingError>(())
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod planner;

pub use error::RoutingError;
