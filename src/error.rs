//! Error types for instance validation and route planning.

use thiserror::Error;

/// Errors raised while validating an instance or building a plan.
///
/// Planning is all-or-nothing: when any customer cannot be placed the whole
/// run fails with [`RoutingError::InfeasibleDemand`] and no partial plan is
/// returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// One or more customers could not be placed on any route.
    #[error("infeasible demand: customers {customer_ids:?} cannot be placed on any available vehicle")]
    InfeasibleDemand {
        /// Ids of the customers left without a route.
        customer_ids: Vec<usize>,
    },

    /// Two locations (customers or depot) share an id.
    #[error("duplicate location id {id}")]
    DuplicateId {
        /// The repeated id.
        id: usize,
    },

    /// The depot was given a non-zero demand.
    #[error("depot must have zero demand, got {demand}")]
    DepotDemand {
        /// Demand found on the depot record.
        demand: u32,
    },

    /// A location has a NaN or infinite coordinate.
    #[error("location {id} has a non-finite coordinate")]
    NonFiniteLocation {
        /// Id of the offending location.
        id: usize,
    },

    /// The distance multiplier is not finite and positive.
    #[error("distance scale must be finite and positive, got {scale}")]
    InvalidScale {
        /// The rejected multiplier.
        scale: f64,
    },

    /// A vehicle type has zero capacity or an invalid cost rate.
    #[error("vehicle type '{label}' needs capacity > 0 and a finite, non-negative cost rate")]
    InvalidVehicleType {
        /// Label of the offending template.
        label: String,
    },
}
