//! Segment-swap (2-opt style) mutation.
//!
//! # Algorithm
//!
//! Each individual is tested with probability `1 / mutation_rate`. When
//! selected, its genes are cloned and a bounded number of local swap
//! attempts — 20% of the tour length — is applied. One attempt picks two
//! random positions with defined successors, compares the combined length
//! of the two current edges against the two candidate swapped edges, and
//! performs the in-place 3-way endpoint reassignment only when the swap
//! is strictly shorter. The tour stays a single cycle and the multiset of
//! cities never changes.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use rand::Rng;

use crate::models::{Tour, TspProblem};

/// Applies the per-individual mutation test and, when it passes, a round
/// of improving segment swaps on a clone of the tour.
///
/// Returns `None` when the individual was not selected (or the rate is
/// zero); otherwise returns the mutated clone — even if no attempt
/// actually improved it — with fitness reset for re-evaluation. The input
/// tour is never modified.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use tsp_evo::distance::EdgeWeightType;
/// use tsp_evo::ga::mutation::segment_swap_mutation;
/// use tsp_evo::models::{Tour, TspProblem};
///
/// let problem = TspProblem::from_coords(
///     &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
///     EdgeWeightType::Euc2d,
/// );
/// let tour = Tour::new(vec![0, 2, 1, 3]);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
///
/// // Rate 1 selects every individual.
/// let mutated = segment_swap_mutation(&problem, &tour, 1, 1, &mut rng).unwrap();
/// assert!(mutated.is_permutation(4));
/// ```
pub fn segment_swap_mutation<R: Rng>(
    problem: &TspProblem,
    tour: &Tour,
    mutation_rate: u32,
    start_offset: usize,
    rng: &mut R,
) -> Option<Tour> {
    // Rate 0 disables mutation entirely.
    if mutation_rate == 0 || rng.random_range(0..mutation_rate) != 0 {
        return None;
    }

    let mut cities = tour.cities().to_vec();
    let attempts = (cities.len() as f64 * 0.2) as usize;
    for _ in 0..attempts {
        swap_attempt(problem, &mut cities, start_offset, rng);
    }
    Some(Tour::new(cities))
}

/// One localized 2-opt attempt: swap endpoints only if the exchanged
/// edges are strictly shorter.
fn swap_attempt<R: Rng>(
    problem: &TspProblem,
    cities: &mut [usize],
    start_offset: usize,
    rng: &mut R,
) {
    let n = cities.len();
    // Both picks need a defined successor, so the last position is out.
    if n < start_offset + 2 {
        return;
    }
    let i = rng.random_range(start_offset..=n - 2);
    let j = rng.random_range(start_offset..=n - 2);

    let old_edges = problem.distance(cities[i], cities[i + 1])
        + problem.distance(cities[j], cities[j + 1]);
    let new_edges = problem.distance(cities[i], cities[j + 1])
        + problem.distance(cities[i + 1], cities[j]);

    if i != j && old_edges > new_edges {
        // 3-way reassignment that realizes the new connectivity while
        // keeping the tour one cycle (not a naive segment reversal).
        let saved = cities[j + 1];
        cities[j + 1] = cities[j];
        cities[j] = cities[i + 1];
        cities[i + 1] = saved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::EdgeWeightType;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid(n: usize) -> TspProblem {
        let coords: Vec<(f64, f64)> = (0..n)
            .map(|i| ((i % 4) as f64 * 10.0, (i / 4) as f64 * 10.0))
            .collect();
        TspProblem::from_coords(&coords, EdgeWeightType::Euc2d)
    }

    #[test]
    fn test_rate_zero_disables() {
        let problem = grid(8);
        let tour = Tour::new((0..8).collect());
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert!(segment_swap_mutation(&problem, &tour, 0, 1, &mut rng).is_none());
        }
    }

    #[test]
    fn test_rate_one_always_selects() {
        let problem = grid(8);
        let tour = Tour::new((0..8).collect());
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert!(segment_swap_mutation(&problem, &tour, 1, 1, &mut rng).is_some());
        }
    }

    #[test]
    fn test_input_never_modified() {
        let problem = grid(8);
        let original: Vec<usize> = vec![0, 5, 2, 7, 1, 6, 3, 4];
        let tour = Tour::new(original.clone());
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            segment_swap_mutation(&problem, &tour, 1, 1, &mut rng);
            assert_eq!(tour.cities(), original.as_slice());
        }
    }

    #[test]
    fn test_mutation_preserves_permutation() {
        let problem = grid(12);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let tour = crate::constructive::random_tour(&problem, 1, &mut rng);
            if let Some(mutated) = segment_swap_mutation(&problem, &tour, 1, 1, &mut rng) {
                assert!(
                    mutated.is_permutation(12),
                    "mutation corrupted tour: {:?}",
                    mutated.cities()
                );
                assert_eq!(mutated.cities()[0], 0);
            }
        }
    }

    #[test]
    fn test_swap_only_when_shorter() {
        // Collinear cities in identity order: every 2-opt exchange is a
        // strict worsening, so no attempt may change anything.
        let problem = TspProblem::from_coords(
            &[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0), (40.0, 0.0)],
            EdgeWeightType::Euc2d,
        );
        let mut cities: Vec<usize> = (0..5).collect();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            swap_attempt(&problem, &mut cities, 1, &mut rng);
        }
        assert_eq!(cities, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_tiny_tour_is_noop() {
        let problem = grid(2);
        let mut cities = vec![0, 1];
        let mut rng = StdRng::seed_from_u64(42);
        swap_attempt(&problem, &mut cities, 1, &mut rng);
        assert_eq!(cities, vec![0, 1]);
    }

    proptest! {
        #[test]
        fn prop_mutation_keeps_city_multiset(seed in 0u64..1000, n in 2usize..24) {
            let problem = grid(n);
            let mut rng = StdRng::seed_from_u64(seed);
            let tour = crate::constructive::random_tour(&problem, 1, &mut rng);
            if let Some(mutated) = segment_swap_mutation(&problem, &tour, 1, 1, &mut rng) {
                prop_assert!(mutated.is_permutation(n));
            }
        }
    }
}
