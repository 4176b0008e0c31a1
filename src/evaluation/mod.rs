//! Tour cost evaluation.
//!
//! The optimization objective is the total cycle length of a tour. A
//! variant form prices the *average* edge cost across a pool of
//! not-yet-placed cities; the stochastic initializer uses it as its
//! acceptance threshold.

use crate::models::TspProblem;

/// Computes the total cycle length of a tour.
///
/// Sums the distance along consecutive positions plus the closing edge
/// back to the first city. Pure function of the tour and the problem's
/// distance formula; tours of fewer than two cities cost zero.
///
/// # Examples
///
/// ```
/// use tsp_evo::distance::EdgeWeightType;
/// use tsp_evo::evaluation::tour_cost;
/// use tsp_evo::models::TspProblem;
///
/// let problem = TspProblem::from_coords(
///     &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
///     EdgeWeightType::Euc2d,
/// );
/// // Perimeter of the unit square.
/// assert_eq!(tour_cost(&problem, &[0, 1, 2, 3]), 4.0);
/// ```
pub fn tour_cost(problem: &TspProblem, tour: &[usize]) -> f64 {
    if tour.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for window in tour.windows(2) {
        total += problem.distance(window[0], window[1]);
    }
    total + problem.distance(tour[tour.len() - 1], tour[0])
}

/// Computes the average edge cost across a pool of unplaced cities.
///
/// The pool is traversed in its current order, including the return edge
/// from the last pool city to the start city (city 0), and the sum is
/// divided by the pool size, truncated to a whole value the way the
/// original acceptance threshold was.
///
/// A pool of a single city yields `f64::INFINITY` — the caller's
/// acceptance test then always passes, since nothing is left to compare.
pub fn pool_average_edge(problem: &TspProblem, pool: &[usize]) -> f64 {
    if pool.len() <= 1 {
        return f64::INFINITY;
    }
    let mut total = 0.0;
    for window in pool.windows(2) {
        total += problem.distance(window[0], window[1]);
    }
    total += problem.distance(pool[pool.len() - 1], 0);
    (total / pool.len() as f64).floor()
}
