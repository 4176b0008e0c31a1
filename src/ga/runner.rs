//! The evolutionary loop.
//!
//! [`Evolution::run`] drives generations strictly sequentially:
//! initialization → evaluation → crossover → mutation → truncation
//! selection → best-so-far bookkeeping → termination check. All file
//! access happens outside the loop; the loop itself is pure computation
//! over the immutable problem value and the population.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::config::GaConfig;
use super::crossover::crossover_pair;
use super::mutation::segment_swap_mutation;
use super::selection::truncate_with_duplication;
use crate::error::TspResult;
use crate::evaluation::tour_cost;
use crate::models::{Tour, TspProblem};

/// Result of an evolutionary run.
#[derive(Debug, Clone, Serialize)]
pub struct EvolutionResult {
    /// The best tour observed across the whole run.
    pub best: Tour,

    /// Its total cycle length (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run terminated early due to stagnation.
    pub stagnated: bool,

    /// Best-so-far fitness at initialization and after each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the evolutionary loop for a TSP instance.
///
/// # Usage
///
/// ```
/// use tsp_evo::distance::EdgeWeightType;
/// use tsp_evo::ga::{Evolution, GaConfig};
/// use tsp_evo::models::TspProblem;
///
/// let problem = TspProblem::from_coords(
///     &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
///     EdgeWeightType::Euc2d,
/// );
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(50)
///     .with_seed(42);
///
/// let result = Evolution::run(&problem, &config).unwrap();
/// assert_eq!(result.best_fitness, 40.0); // square perimeter
/// ```
pub struct Evolution;

impl Evolution {
    /// Runs the GA and returns the best individual found.
    ///
    /// # Errors
    ///
    /// Returns a configuration error before the loop starts if the config
    /// is invalid, or an invariant violation if the population was
    /// corrupted (fatal, see [`crate::ga::crossover`]).
    pub fn run(problem: &TspProblem, config: &GaConfig) -> TspResult<EvolutionResult> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let start_offset = config.start_offset;
        let pop_size = config.population_size;

        // Generation 0: stochastic seeds, each priced once.
        let mut population: Vec<Tour> = (0..pop_size)
            .map(|_| crate::constructive::stochastic_tour(problem, start_offset, &mut rng))
            .collect();
        evaluate(problem, &mut population, config.parallel);

        let mut best = find_best(&population).clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness());

        let stagnation_limit = config.stagnation_limit();
        let mut stagnation_counter = 0usize;

        for gen in 0..config.max_generations {
            // Crossover: P/2 random parent pairs, two children each.
            let mut candidates: Vec<Tour> = Vec::with_capacity(pop_size * 2);
            for _ in 0..pop_size / 2 {
                let p1 = &population[rng.random_range(0..pop_size)];
                let p2 = &population[rng.random_range(0..pop_size)];
                let (c1, c2) = crossover_pair(problem, p1, p2, start_offset, &mut rng)?;
                candidates.push(c1);
                candidates.push(c2);
            }

            // Mutation pass over the current population.
            for tour in &population {
                if let Some(mutated) =
                    segment_swap_mutation(problem, tour, config.mutation_rate, start_offset, &mut rng)
                {
                    candidates.push(mutated);
                }
            }

            evaluate(problem, &mut candidates, config.parallel);

            // Elitist truncation over survivors and candidates together.
            let mut pool = population;
            pool.append(&mut candidates);
            population = truncate_with_duplication(pool, pop_size, config.elite_fraction);

            let gen_best = find_best(&population);
            if gen_best.fitness() < best.fitness() {
                best = gen_best.clone();
                stagnation_counter = 0;
            } else if gen_best.fitness() > best.fitness() {
                // The population regressed past the recorded best; treat
                // as movement, not stagnation.
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }
            fitness_history.push(best.fitness());

            if stagnation_limit > 0 && stagnation_counter >= stagnation_limit {
                return Ok(EvolutionResult {
                    best_fitness: best.fitness(),
                    best,
                    generations: gen + 1,
                    stagnated: true,
                    fitness_history,
                });
            }
        }

        Ok(EvolutionResult {
            best_fitness: best.fitness(),
            best,
            generations: config.max_generations,
            stagnated: false,
            fitness_history,
        })
    }
}

/// Prices every tour in the slice, overwriting any stored fitness.
fn evaluate(problem: &TspProblem, tours: &mut [Tour], parallel: bool) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            tours.par_iter_mut().for_each(|tour| {
                let cost = tour_cost(problem, tour.cities());
                tour.set_fitness(cost);
            });
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for tour in tours.iter_mut() {
        let cost = tour_cost(problem, tour.cities());
        tour.set_fitness(cost);
    }
}

/// Finds the individual with the lowest fitness.
fn find_best(population: &[Tour]) -> &Tour {
    population
        .iter()
        .min_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("population must not be empty")
}
