//! Domain model types.
//!
//! - [`City`] — an indexed, immutable 2D coordinate
//! - [`Tour`] — a permutation chromosome with cached fitness
//! - [`TspProblem`] — the immutable problem value (city table + edge-weight
//!   formula) passed by reference into every operator

mod city;
mod problem;
mod tour;

pub use city::City;
pub use problem::TspProblem;
pub use tour::Tour;
