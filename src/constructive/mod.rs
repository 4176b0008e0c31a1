//! Constructive tour initializers.
//!
//! Uniform random shuffles make poor GA seeds for the TSP, so the primary
//! initializer biases construction toward short edges while keeping
//! enough randomness for population diversity.
//!
//! - [`stochastic_tour`] — randomized nearest-neighbor-biased construction
//! - [`random_tour`] — uniform Fisher-Yates fallback

mod random;
mod stochastic;

pub use random::random_tour;
pub use stochastic::stochastic_tour;
