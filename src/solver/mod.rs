//! Route solvers.
//!
//! - [`brute_force`] — Exact search over all N! visiting orders, O(N!·N)
//! - [`nearest_neighbor`] — Greedy construction from stop 0, O(N²)
//!
//! Both consume a prebuilt [`DistanceMatrix`](crate::distance::DistanceMatrix)
//! and return a [`SolveResult`](crate::models::SolveResult) whose total
//! includes the school-to-first and last-to-school legs.

mod brute_force;
mod nearest_neighbor;

pub use brute_force::brute_force;
pub use nearest_neighbor::nearest_neighbor;
