//! Construction strategies that assign customers to routes.
//!
//! - [`first_fit_decreasing`] — demand-sorted capacity packing, the default
//! - [`nearest_neighbor`] — distance-aware route growth from the depot
//!
//! Both read the instance immutably and return an explicit
//! [`Construction`]; neither improves routes after building them.

mod first_fit;
mod nearest_neighbor;

pub use first_fit::first_fit_decreasing;
pub use nearest_neighbor::{closest_feasible_customer, nearest_neighbor};

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMetric;
use crate::models::{Construction, Instance, Route, VehicleType};

/// Selects how routes are built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ConstructionStrategy {
    /// Demand-sorted first-fit packing; ignores travel distance.
    #[default]
    #[serde(alias = "first-fit")]
    #[cfg_attr(feature = "cli", value(alias = "first-fit"))]
    FirstFitDecreasing,
    /// Nearest feasible customer first, one route at a time.
    #[serde(alias = "nearest")]
    #[cfg_attr(feature = "cli", value(alias = "nearest"))]
    NearestNeighbor,
}

impl ConstructionStrategy {
    /// Runs this strategy on `instance`.
    pub fn construct<M: DistanceMetric>(self, instance: &Instance, metric: &M) -> Construction {
        match self {
            Self::FirstFitDecreasing => first_fit_decreasing(instance),
            Self::NearestNeighbor => nearest_neighbor(instance, metric),
        }
    }
}

/// Opens a route from the first available template that can hold `demand`.
///
/// `in_use` counts routes already built per template and is bumped on
/// success.
pub(crate) fn instantiate(
    vehicle_types: &[VehicleType],
    in_use: &mut [usize],
    demand: u32,
) -> Option<Route> {
    let idx = vehicle_types
        .iter()
        .zip(in_use.iter())
        .position(|(vt, &used)| vt.capacity() >= demand && vt.is_available(used))?;
    in_use[idx] += 1;
    Some(Route::open(idx, &vehicle_types[idx]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::ScaledEuclidean;
    use crate::models::Customer;

    #[test]
    fn test_instantiate_first_fitting_template() {
        let fleet = vec![VehicleType::new("A", 10, 1.0), VehicleType::new("B", 20, 1.0)];
        let mut in_use = vec![0, 0];
        let route = instantiate(&fleet, &mut in_use, 15).expect("B fits");
        assert_eq!(route.vehicle_type(), "B");
        assert_eq!(route.template(), 1);
        assert_eq!(in_use, vec![0, 1]);
    }

    #[test]
    fn test_instantiate_skips_exhausted() {
        let fleet = vec![
            VehicleType::new("A", 10, 1.0).with_limit(1),
            VehicleType::new("B", 20, 1.0),
        ];
        let mut in_use = vec![1, 0];
        let route = instantiate(&fleet, &mut in_use, 5).expect("B available");
        assert_eq!(route.vehicle_type(), "B");
    }

    #[test]
    fn test_instantiate_none() {
        let fleet = vec![VehicleType::new("A", 10, 1.0)];
        let mut in_use = vec![0];
        assert!(instantiate(&fleet, &mut in_use, 11).is_none());
        assert_eq!(in_use, vec![0]);
    }

    #[test]
    fn test_strategies_differ() {
        // far heavy customer first under FFD, near light one first under NN
        let instance = Instance::new(
            Customer::depot(0, 0.0, 0.0),
            vec![Customer::new(1, 0.01, 0.0, 2), Customer::new(2, 0.5, 0.0, 9)],
            vec![VehicleType::new("A", 20, 1.0)],
        )
        .expect("valid");
        let metric = ScaledEuclidean::default();
        let ffd = ConstructionStrategy::FirstFitDecreasing.construct(&instance, &metric);
        let nn = ConstructionStrategy::NearestNeighbor.construct(&instance, &metric);
        assert_eq!(ffd.routes()[0].customers(), &[2, 1]);
        assert_eq!(nn.routes()[0].customers(), &[1, 2]);
    }

    #[test]
    fn test_strategy_default_and_serde() {
        assert_eq!(ConstructionStrategy::default(), ConstructionStrategy::FirstFitDecreasing);
        let s: ConstructionStrategy = serde_json::from_str("\"nearest-neighbor\"").expect("valid");
        assert_eq!(s, ConstructionStrategy::NearestNeighbor);
    }

    #[test]
    fn test_strategy_short_names() {
        let s: ConstructionStrategy = serde_json::from_str("\"first-fit\"").expect("alias");
        assert_eq!(s, ConstructionStrategy::FirstFitDecreasing);
        let s: ConstructionStrategy = serde_json::from_str("\"nearest\"").expect("alias");
        assert_eq!(s, ConstructionStrategy::NearestNeighbor);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_strategy_cli_names() {
        use clap::ValueEnum;

        for (name, expected) in [
            ("first-fit", ConstructionStrategy::FirstFitDecreasing),
            ("first-fit-decreasing", ConstructionStrategy::FirstFitDecreasing),
            ("nearest", ConstructionStrategy::NearestNeighbor),
            ("nearest-neighbor", ConstructionStrategy::NearestNeighbor),
        ] {
            assert_eq!(ConstructionStrategy::from_str(name, false), Ok(expected));
        }
    }
}
