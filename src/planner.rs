//! Feasibility check and fleet report.
//!
//! [`plan`] runs a construction strategy, rejects any run that leaves a
//! customer unserved, then costs every route and aggregates fleet totals.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::constructive::ConstructionStrategy;
use crate::distance::{ScaledEuclidean, DEFAULT_SCALE};
use crate::error::RoutingError;
use crate::evaluation::RouteEvaluator;
use crate::models::Instance;

/// Planner settings.
///
/// # Examples
///
/// ```
/// use fleet_routing::constructive::ConstructionStrategy;
/// use fleet_routing::planner::PlannerConfig;
///
/// let config = PlannerConfig::default()
///     .with_strategy(ConstructionStrategy::NearestNeighbor)
///     .with_distance_scale(111.0);
/// assert_eq!(config.distance_scale(), 111.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    strategy: ConstructionStrategy,
    distance_scale: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            strategy: ConstructionStrategy::default(),
            distance_scale: DEFAULT_SCALE,
        }
    }
}

impl PlannerConfig {
    /// Sets the construction strategy.
    pub fn with_strategy(mut self, strategy: ConstructionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the degrees → distance-unit multiplier.
    pub fn with_distance_scale(mut self, scale: f64) -> Self {
        self.distance_scale = scale;
        self
    }

    /// Construction strategy.
    pub fn strategy(&self) -> ConstructionStrategy {
        self.strategy
    }

    /// Degrees → distance-unit multiplier.
    pub fn distance_scale(&self) -> f64 {
        self.distance_scale
    }

    /// Metric built from the configured scale.
    ///
    /// Fails if the scale is not finite and positive.
    pub fn metric(&self) -> Result<ScaledEuclidean, RoutingError> {
        ScaledEuclidean::try_new(self.distance_scale).ok_or(RoutingError::InvalidScale {
            scale: self.distance_scale,
        })
    }
}

/// Result for one vehicle instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteReport {
    /// Vehicle type label.
    pub vehicle_type: String,
    /// Round-trip distance.
    pub distance: f64,
    /// Distance × cost rate.
    pub cost: f64,
    /// Sum of customer demands on the route.
    pub load: u32,
    /// Vehicle capacity.
    pub capacity: u32,
    /// Stop ids in visit order, depot id at both ends.
    pub stops: Vec<usize>,
}

impl RouteReport {
    /// Customer ids without the depot anchors.
    pub fn customer_ids(&self) -> &[usize] {
        match self.stops.len() {
            0..=2 => &[],
            n => &self.stops[1..n - 1],
        }
    }
}

/// A complete, feasible routing plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Per-route results in creation order.
    pub routes: Vec<RouteReport>,
    /// Sum of route distances.
    pub total_distance: f64,
    /// Sum of route costs.
    pub total_cost: f64,
}

impl Plan {
    /// Number of vehicles used.
    pub fn num_vehicles(&self) -> usize {
        self.routes.len()
    }
}

/// Builds a plan for `instance`, or fails if any customer is left unserved.
///
/// No partial plan is ever returned.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Customer, Instance, VehicleType};
/// use fleet_routing::planner::{plan, PlannerConfig};
///
/// let instance = Instance::new(
///     Customer::depot(0, 4.4184, 114.0932),
///     vec![
///         Customer::new(1, 4.3555, 113.9777, 5),
///         Customer::new(2, 4.3976, 114.0049, 8),
///     ],
///     vec![VehicleType::new("Type A", 25, 1.2)],
/// ).unwrap();
///
/// let plan = plan(&instance, &PlannerConfig::default()).unwrap();
/// assert_eq!(plan.num_vehicles(), 1);
/// assert_eq!(plan.routes[0].stops, vec![0, 2, 1, 0]);
/// assert!((plan.total_cost - plan.total_distance * 1.2).abs() < 1e-9);
/// ```
#[instrument(skip_all, level = "debug", fields(strategy = ?config.strategy()))]
pub fn plan(instance: &Instance, config: &PlannerConfig) -> Result<Plan, RoutingError> {
    let metric = config.metric()?;
    let construction = config.strategy().construct(instance, &metric);

    if !construction.is_complete() {
        let mut unassigned = construction.unassigned().to_vec();
        unassigned.sort_unstable();
        let customer_ids = unassigned
            .into_iter()
            .map(|loc| instance.location(loc).id())
            .collect();
        return Err(RoutingError::InfeasibleDemand { customer_ids });
    }
    construction.check_coverage(instance)?;

    let evaluator = RouteEvaluator::new(instance, &metric);
    let mut routes = Vec::with_capacity(construction.num_routes());
    let mut total_distance = 0.0;
    let mut total_cost = 0.0;

    for route in construction.routes() {
        let cost = evaluator.evaluate(route);
        total_distance += cost.distance;
        total_cost += cost.cost;
        debug!(
            vehicle_type = route.vehicle_type(),
            distance = cost.distance,
            cost = cost.cost,
            load = route.load(),
            "route evaluated"
        );
        routes.push(RouteReport {
            vehicle_type: route.vehicle_type().to_string(),
            distance: cost.distance,
            cost: cost.cost,
            load: route.load(),
            capacity: route.capacity(),
            stops: route
                .stops()
                .iter()
                .map(|&loc| instance.location(loc).id())
                .collect(),
        });
    }

    info!(
        vehicles = routes.len(),
        total_distance, total_cost, "plan complete"
    );
    Ok(Plan {
        routes,
        total_distance,
        total_cost,
    })
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vehicle {}:", self.vehicle_type)?;
        writeln!(
            f,
            "Round Trip Distance: {:.3} km, Cost: RM {:.2}, Demand: {}/{}",
            self.distance, self.cost, self.load, self.capacity
        )?;
        write!(f, "Route: Depot")?;
        for id in self.customer_ids() {
            write!(f, " -> C{id}")?;
        }
        writeln!(f, " -> Depot")
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for route in &self.routes {
            writeln!(f, "{route}")?;
        }
        writeln!(f, "Total Distance = {:.3} km", self.total_distance)?;
        write!(f, "Total Cost = RM {:.2}", self.total_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{distance, DistanceMetric};
    use crate::models::{Customer, VehicleType};

    fn instance(demands: &[u32], fleet: Vec<VehicleType>) -> Instance {
        let customers = demands
            .iter()
            .enumerate()
            .map(|(i, &d)| Customer::new(i + 1, 4.3 + i as f64 * 0.02, 114.0 - i as f64 * 0.01, d))
            .collect();
        Instance::new(Customer::depot(0, 4.4184, 114.0932), customers, fleet).expect("valid")
    }

    fn type_a_b() -> Vec<VehicleType> {
        vec![
            VehicleType::new("Type A", 25, 1.2),
            VehicleType::new("Type B", 30, 1.5),
        ]
    }

    #[test]
    fn test_plan_concrete_scenario() {
        let inst = instance(&[8, 5, 3], type_a_b());
        let plan = plan(&inst, &PlannerConfig::default()).expect("feasible");
        assert_eq!(plan.num_vehicles(), 1);
        let r = &plan.routes[0];
        assert_eq!(r.vehicle_type, "Type A");
        assert_eq!(r.stops, vec![0, 1, 2, 3, 0]);
        assert_eq!(r.customer_ids(), &[1, 2, 3]);
        assert_eq!(r.load, 16);

        let locs = inst.locations();
        let legs: f64 = [0, 1, 2, 3, 0]
            .windows(2)
            .map(|p| distance(&locs[p[0]].location(), &locs[p[1]].location()))
            .sum();
        assert!((r.distance - legs).abs() < 1e-9);
        assert!((r.cost - legs * 1.2).abs() < 1e-9);
        assert!((plan.total_cost - r.cost).abs() < 1e-12);
    }

    #[test]
    fn test_plan_infeasible_names_customers() {
        let inst = instance(&[5, 40, 3, 35], type_a_b());
        let err = plan(&inst, &PlannerConfig::default()).expect_err("infeasible");
        assert_eq!(
            err,
            RoutingError::InfeasibleDemand {
                customer_ids: vec![2, 4]
            }
        );
    }

    #[test]
    fn test_plan_infeasible_with_nearest_neighbor() {
        let inst = instance(&[5, 40], type_a_b());
        let config = PlannerConfig::default().with_strategy(ConstructionStrategy::NearestNeighbor);
        assert!(matches!(
            plan(&inst, &config),
            Err(RoutingError::InfeasibleDemand { .. })
        ));
    }

    #[test]
    fn test_plan_exhausted_limit_is_infeasible() {
        let inst = instance(&[10, 10], vec![VehicleType::new("A", 10, 1.0).with_limit(1)]);
        let err = plan(&inst, &PlannerConfig::default()).expect_err("one vehicle only");
        assert_eq!(
            err,
            RoutingError::InfeasibleDemand {
                customer_ids: vec![2]
            }
        );
        assert!(err.to_string().contains("any available vehicle"));
    }

    #[test]
    fn test_plan_empty_fleet_is_infeasible() {
        let inst = instance(&[1], vec![]);
        assert!(plan(&inst, &PlannerConfig::default()).is_err());
    }

    #[test]
    fn test_plan_no_customers() {
        let inst = instance(&[], type_a_b());
        let plan = plan(&inst, &PlannerConfig::default()).expect("trivially feasible");
        assert_eq!(plan.num_vehicles(), 0);
        assert_eq!(plan.total_distance, 0.0);
        assert_eq!(plan.total_cost, 0.0);
    }

    #[test]
    fn test_plan_totals_sum_routes() {
        let inst = instance(&[8, 5, 3, 6, 5, 8, 3, 6, 5, 8], type_a_b());
        let plan = plan(&inst, &PlannerConfig::default()).expect("feasible");
        let d: f64 = plan.routes.iter().map(|r| r.distance).sum();
        let c: f64 = plan.routes.iter().map(|r| r.cost).sum();
        assert!((plan.total_distance - d).abs() < 1e-9);
        assert!((plan.total_cost - c).abs() < 1e-9);
    }

    #[test]
    fn test_plan_repeatable() {
        let inst = instance(&[8, 5, 3, 6, 5, 8, 3, 6, 5, 8], type_a_b());
        let config = PlannerConfig::default();
        assert_eq!(plan(&inst, &config), plan(&inst, &config));
    }

    #[test]
    fn test_plan_distance_scale() {
        let inst = instance(&[4], type_a_b());
        let base = plan(&inst, &PlannerConfig::default()).expect("feasible");
        let doubled = plan(&inst, &PlannerConfig::default().with_distance_scale(200.0))
            .expect("feasible");
        assert!((doubled.total_distance - 2.0 * base.total_distance).abs() < 1e-9);
        let metric = PlannerConfig::default().metric().expect("default scale");
        let a = inst.depot().location();
        let b = inst.location(1).location();
        assert!((base.total_distance - 2.0 * metric.distance(&a, &b)).abs() < 1e-9);
    }

    #[test]
    fn test_plan_rejects_bad_distance_scale() {
        let inst = instance(&[8, 5, 3], type_a_b());
        for scale in [-100.0, 0.0, f64::NAN, f64::INFINITY] {
            let config = PlannerConfig::default().with_distance_scale(scale);
            match plan(&inst, &config) {
                Err(RoutingError::InvalidScale { scale: got }) => {
                    assert!(got.is_nan() || got == scale);
                }
                other => panic!("scale {scale} accepted: {other:?}"),
            }
        }
    }

    #[test]
    fn test_display() {
        let report = RouteReport {
            vehicle_type: "Type A".into(),
            distance: 12.5,
            cost: 15.0,
            load: 16,
            capacity: 25,
            stops: vec![0, 2, 1, 0],
        };
        let plan = Plan {
            routes: vec![report],
            total_distance: 12.5,
            total_cost: 15.0,
        };
        let text = plan.to_string();
        assert!(text.starts_with("Vehicle Type A:\n"));
        assert!(text.contains("Round Trip Distance: 12.500 km, Cost: RM 15.00, Demand: 16/25"));
        assert!(text.contains("Route: Depot -> C2 -> C1 -> Depot"));
        assert!(text.ends_with("Total Cost = RM 15.00"));
    }

    #[test]
    fn test_config_from_json() {
        let config: PlannerConfig =
            serde_json::from_str(r#"{"strategy": "nearest-neighbor"}"#).expect("valid");
        assert_eq!(config.strategy(), ConstructionStrategy::NearestNeighbor);
        assert_eq!(config.distance_scale(), DEFAULT_SCALE);
    }
}
