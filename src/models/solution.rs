//! Construction result: routes plus an explicit unassigned set.

use super::{Instance, Route};
use crate::error::RoutingError;

/// The outcome of a construction run.
///
/// Holds routes in creation order and the location indices of customers no
/// route could take. Construction never mutates the instance, so running it
/// twice on the same input yields the same `Construction`.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Construction, Route, VehicleType};
///
/// let vt = VehicleType::new("Type A", 25, 1.2);
/// let mut route = Route::open(0, &vt);
/// route.push(1, 5);
/// route.close();
///
/// let mut c = Construction::new();
/// c.add_route(route);
/// c.add_unassigned(2);
/// assert_eq!(c.num_routes(), 1);
/// assert_eq!(c.route_of(1), Some(0));
/// assert_eq!(c.route_of(2), None);
/// assert_eq!(c.unassigned(), &[2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Construction {
    routes: Vec<Route>,
    unassigned: Vec<usize>,
}

impl Construction {
    /// Creates an empty construction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Records a customer that could not be placed.
    pub fn add_unassigned(&mut self, location: usize) {
        self.unassigned.push(location);
    }

    /// Routes in creation order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes (vehicle instances).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Location indices of unassigned customers.
    pub fn unassigned(&self) -> &[usize] {
        &self.unassigned
    }

    /// Returns `true` if every customer was placed.
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// Number of customers placed on a route.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.customers().len()).sum()
    }

    /// Index of the route serving `location`, if any.
    pub fn route_of(&self, location: usize) -> Option<usize> {
        self.routes
            .iter()
            .position(|r| r.customers().contains(&location))
    }

    /// Customer → route mapping indexed by location (depot slot is `None`).
    pub fn assignment(&self, num_locations: usize) -> Vec<Option<usize>> {
        let mut mapping = vec![None; num_locations];
        for (route_idx, route) in self.routes.iter().enumerate() {
            for &loc in route.customers() {
                if let Some(slot) = mapping.get_mut(loc) {
                    *slot = Some(route_idx);
                }
            }
        }
        mapping
    }

    /// Verifies every customer of `instance` appears on exactly one route.
    ///
    /// Fails with [`RoutingError::InfeasibleDemand`] naming each customer
    /// that is missing or served more than once.
    pub fn check_coverage(&self, instance: &Instance) -> Result<(), RoutingError> {
        let mut visits = vec![0usize; instance.num_locations()];
        for route in &self.routes {
            for &loc in route.customers() {
                if let Some(count) = visits.get_mut(loc) {
                    *count += 1;
                }
            }
        }

        let customer_ids: Vec<usize> = instance
            .customer_indices()
            .filter(|&loc| visits[loc] != 1)
            .map(|loc| instance.location(loc).id())
            .collect();

        if customer_ids.is_empty() {
            Ok(())
        } else {
            Err(RoutingError::InfeasibleDemand { customer_ids })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, VehicleType};

    fn instance() -> Instance {
        Instance::new(
            Customer::depot(0, 0.0, 0.0),
            vec![
                Customer::new(1, 0.0, 1.0, 5),
                Customer::new(2, 1.0, 0.0, 5),
            ],
            vec![VehicleType::new("A", 10, 1.0)],
        )
        .expect("valid instance")
    }

    fn route_with(stops: &[usize]) -> Route {
        let mut r = Route::open(0, &VehicleType::new("A", 100, 1.0));
        for &s in stops {
            r.push(s, 1);
        }
        r.close();
        r
    }

    #[test]
    fn test_construction_empty() {
        let c = Construction::new();
        assert_eq!(c.num_routes(), 0);
        assert_eq!(c.num_served(), 0);
        assert!(c.is_complete());
    }

    #[test]
    fn test_coverage_ok() {
        let mut c = Construction::new();
        c.add_route(route_with(&[1]));
        c.add_route(route_with(&[2]));
        assert!(c.check_coverage(&instance()).is_ok());
        assert_eq!(c.assignment(3), vec![None, Some(0), Some(1)]);
    }

    #[test]
    fn test_coverage_missing_customer() {
        let mut c = Construction::new();
        c.add_route(route_with(&[1]));
        assert_eq!(
            c.check_coverage(&instance()),
            Err(RoutingError::InfeasibleDemand {
                customer_ids: vec![2]
            })
        );
    }

    #[test]
    fn test_coverage_duplicate_customer() {
        let mut c = Construction::new();
        c.add_route(route_with(&[1, 2]));
        c.add_route(route_with(&[2]));
        assert_eq!(
            c.check_coverage(&instance()),
            Err(RoutingError::InfeasibleDemand {
                customer_ids: vec![2]
            })
        );
    }

    #[test]
    fn test_empty_construction_fails_coverage() {
        let err = Construction::new()
            .check_coverage(&instance())
            .expect_err("nothing served");
        assert_eq!(
            err,
            RoutingError::InfeasibleDemand {
                customer_ids: vec![1, 2]
            }
        );
    }
}
