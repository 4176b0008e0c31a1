//! Genetic algorithm for the symmetric TSP.
//!
//! The operators are permutation-specialized: ordinary crossover and
//! mutation corrupt permutations (duplicate or missing cities), so every
//! operator here preserves the permutation invariant by construction and
//! the crossover verifies its preconditions.
//!
//! - [`GaConfig`] — algorithm parameters with builder methods
//! - [`crossover`] — greedy edge-based (Grefenstette) crossover
//! - [`mutation`] — localized 2-opt segment-swap mutation
//! - [`selection`] — elitist truncation with duplication
//! - [`Evolution`] — the generation-control loop

mod config;
pub mod crossover;
pub mod mutation;
pub mod selection;
mod runner;

pub use config::GaConfig;
pub use runner::{Evolution, EvolutionResult};
