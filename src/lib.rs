//! # tsp-evo
//!
//! Evolutionary solver for the symmetric Traveling Salesman Problem with
//! permutation-specialized genetic operators.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (City, Tour, TspProblem)
//! - [`distance`] — EUC_2D and ATT edge-weight formulas
//! - [`evaluation`] — Tour cost and pool-average edge cost
//! - [`constructive`] — Stochastic tour initialization
//! - [`ga`] — Greedy edge crossover, segment-swap mutation, elitist
//!   truncation selection, and the generation-control loop
//! - [`tsplib`] — Problem and known-optimal-tour file loading
//!
//! ## Example
//!
//! ```
//! use tsp_evo::distance::EdgeWeightType;
//! use tsp_evo::ga::{Evolution, GaConfig};
//! use tsp_evo::models::TspProblem;
//!
//! let problem = TspProblem::from_coords(
//!     &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
//!     EdgeWeightType::Euc2d,
//! );
//! let config = GaConfig::default()
//!     .with_population_size(20)
//!     .with_max_generations(50)
//!     .with_seed(42);
//!
//! let result = Evolution::run(&problem, &config).unwrap();
//! assert_eq!(result.best_fitness, 40.0);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod models;
pub mod tsplib;

pub use error::{TspError, TspResult};
