//! Route cost evaluation.

mod evaluator;

pub use evaluator::{evaluate_route, RouteCost, RouteEvaluator};
