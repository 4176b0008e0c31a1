//! Uniform random tour initializer.

use rand::Rng;

use crate::models::{Tour, TspProblem};

/// Builds a uniformly random tour, keeping the first `start_offset`
/// positions fixed to the identity prefix.
///
/// Fallback seed when the distance-aware initializer is not wanted.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use tsp_evo::constructive::random_tour;
/// use tsp_evo::distance::EdgeWeightType;
/// use tsp_evo::models::TspProblem;
///
/// let problem = TspProblem::from_coords(
///     &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
///     EdgeWeightType::Euc2d,
/// );
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let tour = random_tour(&problem, 1, &mut rng);
/// assert_eq!(tour.cities()[0], 0);
/// assert!(tour.is_permutation(4));
/// ```
pub fn random_tour<R: Rng>(problem: &TspProblem, start_offset: usize, rng: &mut R) -> Tour {
    let n = problem.num_cities();
    let mut cities: Vec<usize> = (0..n).collect();

    // Fisher-Yates over the mutable region only
    if n > start_offset + 1 {
        for i in ((start_offset + 1)..n).rev() {
            let j = rng.random_range(start_offset..=i);
            cities.swap(i, j);
        }
    }

    Tour::new(cities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::EdgeWeightType;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line(n: usize) -> TspProblem {
        let coords: Vec<(f64, f64)> = (0..n).map(|i| (i as f64, 0.0)).collect();
        TspProblem::from_coords(&coords, EdgeWeightType::Euc2d)
    }

    #[test]
    fn test_random_tour_is_permutation() {
        let problem = line(12);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let tour = random_tour(&problem, 1, &mut rng);
            assert!(tour.is_permutation(12));
            assert_eq!(tour.cities()[0], 0);
        }
    }

    #[test]
    fn test_random_tour_respects_wider_prefix() {
        let problem = line(8);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let tour = random_tour(&problem, 3, &mut rng);
            assert_eq!(&tour.cities()[..3], &[0, 1, 2]);
            assert!(tour.is_permutation(8));
        }
    }

    #[test]
    fn test_random_tour_tiny_instances() {
        for n in [1, 2] {
            let problem = line(n);
            let mut rng = StdRng::seed_from_u64(7);
            let tour = random_tour(&problem, 1, &mut rng);
            assert!(tour.is_permutation(n));
        }
    }
}
