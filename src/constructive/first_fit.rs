//! First-fit-decreasing packing over vehicle-type templates.
//!
//! # Algorithm
//!
//! Customers are sorted by descending demand (stable, so equal demands keep
//! input order). Each customer goes to the first open route with enough
//! residual capacity; if none fits, a new route is instantiated from the
//! first template in catalog order that can hold it. Customers no template
//! can hold are left unassigned. Finally every route is anchored at the
//! depot.
//!
//! Travel distance plays no part in the assignment.
//!
//! # Complexity
//!
//! O(n log n + n·r) where r = number of routes opened.

use std::cmp::Reverse;

use tracing::{debug, instrument, warn};

use super::instantiate;
use crate::models::{Construction, Instance, Route};

/// Packs customers into routes by first-fit-decreasing.
///
/// The instance is not modified, so repeated calls return identical
/// constructions.
///
/// # Examples
///
/// ```
/// use fleet_routing::constructive::first_fit_decreasing;
/// use fleet_routing::models::{Customer, Instance, VehicleType, DEPOT};
///
/// let instance = Instance::new(
///     Customer::depot(0, 4.4184, 114.0932),
///     vec![
///         Customer::new(1, 4.3555, 113.9777, 5),
///         Customer::new(2, 4.3976, 114.0049, 8),
///         Customer::new(3, 4.3163, 114.0764, 3),
///     ],
///     vec![
///         VehicleType::new("Type A", 25, 1.2),
///         VehicleType::new("Type B", 30, 1.5),
///     ],
/// ).unwrap();
///
/// let construction = first_fit_decreasing(&instance);
/// assert_eq!(construction.num_routes(), 1);
/// let route = &construction.routes()[0];
/// assert_eq!(route.vehicle_type(), "Type A");
/// assert_eq!(route.stops(), &[DEPOT, 2, 1, 3, DEPOT]);
/// assert_eq!(route.load(), 16);
/// ```
#[instrument(skip_all, level = "debug")]
pub fn first_fit_decreasing(instance: &Instance) -> Construction {
    let mut order: Vec<usize> = instance.customer_indices().collect();
    order.sort_by_key(|&loc| Reverse(instance.location(loc).demand()));

    let vehicle_types = instance.vehicle_types();
    let mut in_use = vec![0usize; vehicle_types.len()];
    let mut routes: Vec<Route> = Vec::new();
    let mut construction = Construction::new();

    for loc in order {
        let customer = instance.location(loc);
        let demand = customer.demand();

        if let Some(route) = routes.iter_mut().find(|r| r.fits(demand)) {
            route.push(loc, demand);
            continue;
        }

        match instantiate(vehicle_types, &mut in_use, demand) {
            Some(mut route) => {
                debug!(
                    route = routes.len(),
                    vehicle_type = route.vehicle_type(),
                    customer = customer.id(),
                    "opened route"
                );
                route.push(loc, demand);
                routes.push(route);
            }
            None => {
                warn!(customer = customer.id(), demand, "no vehicle type can take customer");
                construction.add_unassigned(loc);
            }
        }
    }

    for mut route in routes {
        route.close();
        construction.add_route(route);
    }

    debug!(
        routes = construction.num_routes(),
        unassigned = construction.unassigned().len(),
        "first-fit-decreasing done"
    );
    construction
}
