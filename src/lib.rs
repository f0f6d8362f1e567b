//! # busroute
//!
//! School bus route optimization: a single bus leaves the school, picks up
//! every student stop exactly once, and returns — a small TSP instance with
//! a mandatory fixed start/end node. Provides an exact brute-force solver
//! and a nearest-neighbor heuristic behind a common solve facade.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Point, Route, SolveResult)
//! - [`distance`] — Euclidean distance matrix with the school at the last index
//! - [`evaluation`] — Route cost evaluation including both school legs
//! - [`solver`] — Exact brute-force and nearest-neighbor solvers
//! - [`engine`] — Strategy selection and the stateless solve entry point
//! - [`report`] — Text rendering of a solve result

pub mod distance;
pub mod engine;
pub mod evaluation;
pub mod models;
pub mod report;
pub mod solver;
