//! Permutation chromosome for the TSP genetic algorithm.
//!
//! A tour encodes a visiting order as a permutation of all city indices,
//! implicitly closed into a cycle. The first `start_offset` positions
//! (conventionally one: city 0) are fixed and excluded from crossover and
//! mutation.

use serde::{Deserialize, Serialize};

/// A tour: a permutation of city indices with a cached fitness value.
///
/// Fitness is the total cycle length — lower is better. It is
/// `f64::INFINITY` until evaluated, and computed once per creation.
///
/// # Examples
///
/// ```
/// use tsp_evo::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1, 3]);
/// assert_eq!(tour.cities(), &[0, 2, 1, 3]);
/// assert_eq!(tour.fitness(), f64::INFINITY);
/// assert!(tour.is_permutation(4));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tour {
    cities: Vec<usize>,
    fitness: f64,
}

impl Tour {
    /// Creates a new tour from a city permutation.
    pub fn new(cities: Vec<usize>) -> Self {
        Self {
            cities,
            fitness: f64::INFINITY,
        }
    }

    /// Returns the city permutation.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Returns a mutable reference to the city permutation.
    ///
    /// Callers must preserve the permutation invariant.
    pub fn cities_mut(&mut self) -> &mut Vec<usize> {
        &mut self.cities
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the tour has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Cached fitness (total cycle length, lower is better).
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Sets the cached fitness.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Returns `true` if this tour is a permutation of `[0, n)`.
    pub fn is_permutation(&self, n: usize) -> bool {
        if self.cities.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &c in &self.cities {
            if c >= n || seen[c] {
                return false;
            }
            seen[c] = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_new() {
        let tour = Tour::new(vec![0, 1, 2]);
        assert_eq!(tour.cities(), &[0, 1, 2]);
        assert_eq!(tour.len(), 3);
        assert!(!tour.is_empty());
        assert_eq!(tour.fitness(), f64::INFINITY);
    }

    #[test]
    fn test_tour_set_fitness() {
        let mut tour = Tour::new(vec![0, 1]);
        tour.set_fitness(42.0);
        assert_eq!(tour.fitness(), 42.0);
    }

    #[test]
    fn test_tour_clone_keeps_fitness() {
        let mut tour = Tour::new(vec![0, 2, 1]);
        tour.set_fitness(10.0);
        let cloned = tour.clone();
        assert_eq!(cloned.cities(), &[0, 2, 1]);
        assert_eq!(cloned.fitness(), 10.0);
    }

    #[test]
    fn test_is_permutation() {
        assert!(Tour::new(vec![0, 2, 1, 3]).is_permutation(4));
        // duplicate
        assert!(!Tour::new(vec![0, 2, 2, 3]).is_permutation(4));
        // out of range
        assert!(!Tour::new(vec![0, 2, 4, 3]).is_permutation(4));
        // wrong length
        assert!(!Tour::new(vec![0, 2, 1]).is_permutation(4));
    }

    #[test]
    fn test_empty_tour() {
        let tour = Tour::new(vec![]);
        assert!(tour.is_empty());
        assert!(tour.is_permutation(0));
    }
}
