//! Stochastic nearest-neighbor-biased tour construction.
//!
//! # Algorithm
//!
//! Starting from the fixed prefix, each position is filled by sampling a
//! uniformly random city from the not-yet-placed pool and accepting it if
//! the edge from the last placed city is shorter than the pool's average
//! edge cost ([`pool_average_edge`]). Rejected candidates are resampled,
//! but the retry loop is bounded two ways:
//!
//! - a hard cap of `ceil(0.2 * N)` attempts per position forces acceptance
//!   of the current candidate, and
//! - each attempt carries a random early-acceptance chance that grows as
//!   attempts accumulate.
//!
//! So a position costs at most a fixed multiple of N attempts and the
//! loop always terminates; resampling exhaustion is not an error.

use rand::Rng;

use crate::evaluation::pool_average_edge;
use crate::models::{Tour, TspProblem};

/// Builds one tour by randomized, distance-aware selection among unused
/// cities.
///
/// The first `start_offset` positions are the identity prefix (city 0 by
/// default convention). The output is always a complete permutation.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use tsp_evo::constructive::stochastic_tour;
/// use tsp_evo::distance::EdgeWeightType;
/// use tsp_evo::models::TspProblem;
///
/// let problem = TspProblem::from_coords(
///     &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (5.0, 5.0)],
///     EdgeWeightType::Euc2d,
/// );
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let tour = stochastic_tour(&problem, 1, &mut rng);
/// assert!(tour.is_permutation(4));
/// assert_eq!(tour.cities()[0], 0);
/// ```
pub fn stochastic_tour<R: Rng>(problem: &TspProblem, start_offset: usize, rng: &mut R) -> Tour {
    let n = problem.num_cities();
    let mut cities: Vec<usize> = (0..start_offset.min(n)).collect();
    let mut pool: Vec<usize> = (start_offset.min(n)..n).collect();

    // Attempt cap and early-acceptance window, both fractions of N.
    let cap = ((n as f64 * 0.2).ceil() as usize).max(1);
    let window = ((n as f64 * 0.3) as usize).max(1);

    while !pool.is_empty() {
        let mut attempts = 0usize;
        let location = loop {
            let location = rng.random_range(0..pool.len());
            attempts += 1;

            let threshold = pool_average_edge(problem, &pool);
            let distance = match cities.last() {
                Some(&last) => problem.distance(last, pool[location]),
                // Empty prefix: nothing to measure from, accept outright.
                None => break location,
            };

            if distance <= threshold {
                break location;
            }
            // Too long an edge: force-accept at the cap, or with a random
            // chance that rises as attempts accumulate.
            if attempts >= cap || rng.random_range(0..(window / attempts).max(1)) == 0 {
                break location;
            }
        };

        // Order-preserving removal: the pool's traversal order feeds the
        // in-order cyclic average in `pool_average_edge`.
        cities.push(pool.remove(location));
    }

    Tour::new(cities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::EdgeWeightType;
    use crate::evaluation::tour_cost;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid(n: usize) -> TspProblem {
        let coords: Vec<(f64, f64)> = (0..n)
            .map(|i| ((i % 5) as f64 * 10.0, (i / 5) as f64 * 10.0))
            .collect();
        TspProblem::from_coords(&coords, EdgeWeightType::Euc2d)
    }

    #[test]
    fn test_output_is_complete_permutation() {
        let problem = grid(20);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let tour = stochastic_tour(&problem, 1, &mut rng);
            assert!(tour.is_permutation(20));
            assert_eq!(tour.cities()[0], 0);
        }
    }

    #[test]
    fn test_pool_size_one() {
        let problem = grid(2);
        let mut rng = StdRng::seed_from_u64(42);
        let tour = stochastic_tour(&problem, 1, &mut rng);
        assert_eq!(tour.cities(), &[0, 1]);
    }

    #[test]
    fn test_single_city() {
        let problem = grid(1);
        let mut rng = StdRng::seed_from_u64(42);
        let tour = stochastic_tour(&problem, 1, &mut rng);
        assert_eq!(tour.cities(), &[0]);
    }

    #[test]
    fn test_zero_start_offset() {
        let problem = grid(6);
        let mut rng = StdRng::seed_from_u64(42);
        let tour = stochastic_tour(&problem, 0, &mut rng);
        assert!(tour.is_permutation(6));
    }

    #[test]
    fn test_beats_uniform_shuffle_on_average() {
        // Distance-aware construction should produce shorter seeds than
        // uniform shuffles on a spread-out instance, on average.
        let problem = grid(25);
        let mut rng = StdRng::seed_from_u64(1);
        let runs = 30;

        let stochastic_total: f64 = (0..runs)
            .map(|_| tour_cost(&problem, stochastic_tour(&problem, 1, &mut rng).cities()))
            .sum();
        let random_total: f64 = (0..runs)
            .map(|_| {
                tour_cost(
                    &problem,
                    crate::constructive::random_tour(&problem, 1, &mut rng).cities(),
                )
            })
            .sum();

        assert!(
            stochastic_total < random_total,
            "expected stochastic seeds to be shorter on average: {stochastic_total} vs {random_total}"
        );
    }

    #[test]
    fn test_terminates_on_pathological_geometry() {
        // One far-away city makes every candidate edge look bad; the
        // bounded retry policy must still terminate and place it.
        let problem = TspProblem::from_coords(
            &[
                (0.0, 0.0),
                (1.0, 0.0),
                (1.0, 1.0),
                (0.0, 1.0),
                (1000.0, 1000.0),
            ],
            EdgeWeightType::Euc2d,
        );
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let tour = stochastic_tour(&problem, 1, &mut rng);
            assert!(tour.is_permutation(5));
        }
    }
}
