//! Walks a route's legs and accumulates distance and monetary cost.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMetric;
use crate::models::{Instance, Route};

/// Distance and cost of one route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteCost {
    /// Sum of leg distances.
    pub distance: f64,
    /// Sum of leg distance × cost rate.
    pub cost: f64,
}

/// Evaluates routes of one instance under a distance metric.
///
/// Evaluation is pure: neither the route nor the instance is modified.
///
/// # Examples
///
/// ```
/// use fleet_routing::distance::ScaledEuclidean;
/// use fleet_routing::evaluation::RouteEvaluator;
/// use fleet_routing::models::{Customer, Instance, Route, VehicleType};
///
/// let instance = Instance::new(
///     Customer::depot(0, 0.0, 0.0),
///     vec![Customer::new(1, 0.03, 0.04, 5)],
///     vec![VehicleType::new("Type A", 25, 2.0)],
/// ).unwrap();
///
/// let mut route = Route::open(0, &instance.vehicle_types()[0]);
/// route.push(1, 5);
/// route.close();
///
/// let metric = ScaledEuclidean::default();
/// let cost = RouteEvaluator::new(&instance, &metric).evaluate(&route);
/// assert!((cost.distance - 10.0).abs() < 1e-9);
/// assert!((cost.cost - 20.0).abs() < 1e-9);
/// ```
pub struct RouteEvaluator<'a, M> {
    instance: &'a Instance,
    metric: &'a M,
}

impl<'a, M: DistanceMetric> RouteEvaluator<'a, M> {
    /// Creates an evaluator for the given instance.
    pub fn new(instance: &'a Instance, metric: &'a M) -> Self {
        Self { instance, metric }
    }

    /// Distance of the leg between two locations.
    pub fn leg(&self, from: usize, to: usize) -> f64 {
        let a = self.instance.location(from).location();
        let b = self.instance.location(to).location();
        self.metric.distance(&a, &b)
    }

    /// Sums every consecutive stop pair of `route`.
    ///
    /// A route with fewer than two stops costs nothing.
    pub fn evaluate(&self, route: &Route) -> RouteCost {
        let rate = route.cost_per_distance();
        route
            .stops()
            .windows(2)
            .fold(RouteCost::default(), |acc, pair| {
                let d = self.leg(pair[0], pair[1]);
                RouteCost {
                    distance: acc.distance + d,
                    cost: acc.cost + d * rate,
                }
            })
    }
}

/// Evaluates a single route. See [`RouteEvaluator::evaluate`].
pub fn evaluate_route<M: DistanceMetric>(metric: &M, instance: &Instance, route: &Route) -> RouteCost {
    RouteEvaluator::new(instance, metric).evaluate(route)
}
