//! Nearest-neighbor route growth.
//!
//! Builds routes one at a time: seed with the remaining customer closest to
//! the depot, then keep visiting the closest customer that still fits the
//! residual capacity. When nothing fits, the route returns to the depot and
//! a new one is seeded.
//!
//! Unlike [`first_fit_decreasing`](super::first_fit_decreasing) this is
//! distance-aware, so it yields different routes and costs.
//!
//! # Complexity
//!
//! O(n²) where n = number of customers.

use tracing::{debug, instrument, warn};

use super::instantiate;
use crate::distance::DistanceMetric;
use crate::models::{Construction, GeoPoint, Instance};

/// Returns the candidate closest to `from` whose demand fits `residual`.
///
/// Candidates are location indices into `instance`. On equal distance the
/// earlier candidate wins. `None` if no candidate fits.
///
/// # Examples
///
/// ```
/// use fleet_routing::constructive::closest_feasible_customer;
/// use fleet_routing::distance::ScaledEuclidean;
/// use fleet_routing::models::{Customer, Instance, VehicleType};
///
/// let instance = Instance::new(
///     Customer::depot(0, 0.0, 0.0),
///     vec![
///         Customer::new(1, 0.0, 0.01, 20), // near but heavy
///         Customer::new(2, 0.0, 0.05, 5),
///     ],
///     vec![VehicleType::new("A", 25, 1.0)],
/// ).unwrap();
///
/// let metric = ScaledEuclidean::default();
/// let from = instance.depot().location();
/// assert_eq!(closest_feasible_customer(&metric, &instance, &from, &[1, 2], 25), Some(1));
/// assert_eq!(closest_feasible_customer(&metric, &instance, &from, &[1, 2], 10), Some(2));
/// assert_eq!(closest_feasible_customer(&metric, &instance, &from, &[1, 2], 4), None);
/// ```
pub fn closest_feasible_customer<M: DistanceMetric>(
    metric: &M,
    instance: &Instance,
    from: &GeoPoint,
    candidates: &[usize],
    residual: u32,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for &loc in candidates {
        let customer = instance.location(loc);
        if customer.demand() > residual {
            continue;
        }
        let d = metric.distance(from, &customer.location());
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((loc, d)),
        }
    }
    best.map(|(loc, _)| loc)
}

/// Constructs routes by nearest-neighbor growth from the depot.
///
/// Customers that no vehicle type can hold, and customers left over once
/// every bounded template is exhausted, are reported as unassigned.
///
/// # Examples
///
/// ```
/// use fleet_routing::constructive::nearest_neighbor;
/// use fleet_routing::distance::ScaledEuclidean;
/// use fleet_routing::models::{Customer, Instance, VehicleType};
///
/// let instance = Instance::new(
///     Customer::depot(0, 0.0, 0.0),
///     vec![
///         Customer::new(1, 0.0, 0.03, 10),
///         Customer::new(2, 0.0, 0.01, 10),
///         Customer::new(3, 0.0, 0.02, 10),
///     ],
///     vec![VehicleType::new("A", 30, 1.0)],
/// ).unwrap();
///
/// let construction = nearest_neighbor(&instance, &ScaledEuclidean::default());
/// assert_eq!(construction.routes()[0].customers(), &[2, 3, 1]);
/// ```
#[instrument(skip_all, level = "debug")]
pub fn nearest_neighbor<M: DistanceMetric>(instance: &Instance, metric: &M) -> Construction {
    let vehicle_types = instance.vehicle_types();
    let max_capacity = vehicle_types.iter().map(|vt| vt.capacity()).max().unwrap_or(0);

    let mut construction = Construction::new();
    let mut pending: Vec<usize> = Vec::with_capacity(instance.num_customers());
    for loc in instance.customer_indices() {
        let customer = instance.location(loc);
        if customer.demand() > max_capacity {
            warn!(
                customer = customer.id(),
                demand = customer.demand(),
                "no vehicle type can take customer"
            );
            construction.add_unassigned(loc);
        } else {
            pending.push(loc);
        }
    }

    let depot = instance.depot().location();
    let mut in_use = vec![0usize; vehicle_types.len()];

    while !pending.is_empty() {
        let available_capacity = vehicle_types
            .iter()
            .zip(&in_use)
            .filter(|(vt, used)| vt.is_available(**used))
            .map(|(vt, _)| vt.capacity())
            .max()
            .unwrap_or(0);

        let Some(seed) =
            closest_feasible_customer(metric, instance, &depot, &pending, available_capacity)
        else {
            break;
        };
        let seed_demand = instance.location(seed).demand();
        let Some(mut route) = instantiate(vehicle_types, &mut in_use, seed_demand) else {
            break;
        };

        debug!(
            route = construction.num_routes(),
            vehicle_type = route.vehicle_type(),
            customer = instance.location(seed).id(),
            "opened route"
        );
        route.push(seed, seed_demand);
        pending.retain(|&l| l != seed);

        let mut current = instance.location(seed).location();
        while let Some(next) = closest_feasible_customer(
            metric,
            instance,
            &current,
            &pending,
            route.residual_capacity(),
        ) {
            let customer = instance.location(next);
            route.push(next, customer.demand());
            pending.retain(|&l| l != next);
            current = customer.location();
        }

        route.close();
        construction.add_route(route);
    }

    if !pending.is_empty() {
        warn!(count = pending.len(), "vehicle limits exhausted");
    }
    for loc in pending {
        construction.add_unassigned(loc);
    }

    debug!(
        routes = construction.num_routes(),
        unassigned = construction.unassigned().len(),
        "nearest-neighbor done"
    );
    construction
}
