//! Route cost evaluation.

mod evaluator;

pub use evaluator::RouteEvaluator;
