//! TSP problem instance.

use serde::{Deserialize, Serialize};

use crate::distance::EdgeWeightType;
use crate::models::City;

/// An immutable TSP instance: the city coordinate table plus the
/// edge-weight formula.
///
/// This value is loaded once before evolution starts and passed by
/// reference into every operator. It is the system's only distance
/// authority, so all components compare costs computed the same way.
///
/// # Examples
///
/// ```
/// use tsp_evo::distance::EdgeWeightType;
/// use tsp_evo::models::{City, TspProblem};
///
/// let problem = TspProblem::new(
///     vec![City::new(0, 0.0, 0.0), City::new(1, 3.0, 4.0)],
///     EdgeWeightType::Euc2d,
/// );
/// assert_eq!(problem.num_cities(), 2);
/// assert_eq!(problem.distance(0, 1), 5.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TspProblem {
    cities: Vec<City>,
    edge_weight: EdgeWeightType,
}

impl TspProblem {
    /// Creates a problem from a city table and an edge-weight formula.
    pub fn new(cities: Vec<City>, edge_weight: EdgeWeightType) -> Self {
        Self {
            cities,
            edge_weight,
        }
    }

    /// Creates a problem from bare coordinate pairs, assigning city
    /// indices in order.
    pub fn from_coords(coords: &[(f64, f64)], edge_weight: EdgeWeightType) -> Self {
        let cities = coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| City::new(i, x, y))
            .collect();
        Self::new(cities, edge_weight)
    }

    /// Returns all cities.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Number of cities in the instance.
    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    /// The configured edge-weight formula.
    pub fn edge_weight(&self) -> EdgeWeightType {
        self.edge_weight
    }

    /// Travel cost between two city indices.
    ///
    /// Symmetric, non-negative, zero on the diagonal.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.edge_weight
            .distance(self.cities[a].coords(), self.cities[b].coords())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> TspProblem {
        TspProblem::from_coords(
            &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
            EdgeWeightType::Euc2d,
        )
    }

    #[test]
    fn test_from_coords_assigns_ids() {
        let problem = square();
        assert_eq!(problem.num_cities(), 4);
        for (i, city) in problem.cities().iter().enumerate() {
            assert_eq!(city.id(), i);
        }
    }

    #[test]
    fn test_distance_symmetric_zero_diagonal() {
        let problem = square();
        for a in 0..4 {
            assert_eq!(problem.distance(a, a), 0.0);
            for b in 0..4 {
                assert_eq!(problem.distance(a, b), problem.distance(b, a));
            }
        }
    }

    #[test]
    fn test_distance_uses_edge_weight() {
        let att = TspProblem::from_coords(&[(0.0, 0.0), (3.0, 4.0)], EdgeWeightType::Att);
        // ATT: rij = sqrt(25/10) = 1.58, tij = 2
        assert_eq!(att.distance(0, 1), 2.0);
        let euc = TspProblem::from_coords(&[(0.0, 0.0), (3.0, 4.0)], EdgeWeightType::Euc2d);
        assert_eq!(euc.distance(0, 1), 5.0);
    }
}
