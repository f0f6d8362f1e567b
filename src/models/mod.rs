//! Domain model types for the school run.
//!
//! Provides the core abstractions: student stops as plain 2-D points, a
//! route as a permutation of stop ids (the school is implied at both ends),
//! and the solve result returned to the caller.

mod point;
mod route;
mod solve_result;

pub use point::Point;
pub use route::Route;
pub use solve_result::SolveResult;
