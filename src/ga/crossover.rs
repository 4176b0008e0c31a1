//! Greedy edge-based (heuristic) crossover.
//!
//! # Algorithm
//!
//! The child is grown one city at a time. Given the last placed city, the
//! successor of that city in each parent is looked up; the closer of the
//! two (by edge cost) is placed next. On conflicts — a successor already
//! placed, or undefined because the city is a parent's last gene — the
//! other candidate is used, and if both fail a uniformly random unplaced
//! city is taken. The child therefore inherits short edges from both
//! parents while staying a valid permutation by construction.
//!
//! Each pair of parents yields two children, one per direction: the
//! first child's seed gene comes from a random position of the first
//! parent, the second child's from a random position of the second. The
//! unplaced pool is built from the seeding parent's remaining genes
//! only; the other parent is consulted solely through successor lookups.
//!
//! # Reference
//!
//! Grefenstette, J. et al. (1985). "Genetic algorithms for the traveling
//! salesman problem", *Proc. 1st Int. Conf. on Genetic Algorithms*.

use rand::Rng;

use crate::error::{TspError, TspResult};
use crate::models::{Tour, TspProblem};

const OPERATOR: &str = "greedy_crossover";

/// Crosses two parents in both directions, producing two children.
///
/// Parents are read-only; each child is built from cloned gene data. Both
/// children are valid permutations of the parents' shared city set and
/// keep the fixed `start_offset` prefix unchanged.
///
/// # Errors
///
/// Returns [`TspError::InvariantViolation`] if the parents do not hold
/// exactly the same set of distinct cities. This indicates upstream
/// corruption of the population and aborts the run.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use tsp_evo::distance::EdgeWeightType;
/// use tsp_evo::ga::crossover::crossover_pair;
/// use tsp_evo::models::{Tour, TspProblem};
///
/// let problem = TspProblem::from_coords(
///     &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
///     EdgeWeightType::Euc2d,
/// );
/// let p1 = Tour::new(vec![0, 1, 2, 3]);
/// let p2 = Tour::new(vec![0, 3, 1, 2]);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
///
/// let (c1, c2) = crossover_pair(&problem, &p1, &p2, 1, &mut rng).unwrap();
/// assert!(c1.is_permutation(4));
/// assert!(c2.is_permutation(4));
/// assert_eq!(c1.cities()[0], 0);
/// ```
pub fn crossover_pair<R: Rng>(
    problem: &TspProblem,
    parent1: &Tour,
    parent2: &Tour,
    start_offset: usize,
    rng: &mut R,
) -> TspResult<(Tour, Tour)> {
    check_parents(problem, parent1.cities(), parent2.cities())?;
    let c1 = greedy_child(problem, parent1.cities(), parent2.cities(), start_offset, rng);
    let c2 = greedy_child(problem, parent2.cities(), parent1.cities(), start_offset, rng);
    Ok((Tour::new(c1), Tour::new(c2)))
}

/// Verifies the crossover precondition: equal lengths and identical sets
/// of distinct cities.
fn check_parents(problem: &TspProblem, g1: &[usize], g2: &[usize]) -> TspResult<()> {
    if g1.len() != g2.len() {
        return Err(TspError::InvariantViolation {
            operator: OPERATOR,
            detail: format!(
                "parent lengths differ: {} vs {} (parents {g1:?} and {g2:?})",
                g1.len(),
                g2.len()
            ),
        });
    }
    let n = problem.num_cities();
    for genes in [g1, g2] {
        let mut seen = vec![false; n];
        for (pos, &c) in genes.iter().enumerate() {
            if c >= n {
                return Err(TspError::InvariantViolation {
                    operator: OPERATOR,
                    detail: format!("gene {c}[{pos}] out of range for {n} cities in {genes:?}"),
                });
            }
            if seen[c] {
                return Err(TspError::InvariantViolation {
                    operator: OPERATOR,
                    detail: format!("gene {c}[{pos}] occurs more than once in {genes:?}"),
                });
            }
            seen[c] = true;
        }
    }
    // Both are duplicate-free and equally long; equal sets iff every gene
    // of one occurs in the other.
    let mut in_g1 = vec![false; n];
    for &c in g1 {
        in_g1[c] = true;
    }
    if let Some(&missing) = g2.iter().find(|&&c| !in_g1[c]) {
        return Err(TspError::InvariantViolation {
            operator: OPERATOR,
            detail: format!("gene sets differ: {missing} only in second parent {g2:?}"),
        });
    }
    Ok(())
}

/// Builds one child, seeding from `chosen` and consulting `other` through
/// successor lookups only.
fn greedy_child<R: Rng>(
    problem: &TspProblem,
    chosen: &[usize],
    other: &[usize],
    start_offset: usize,
    rng: &mut R,
) -> Vec<usize> {
    let n = chosen.len();
    if n <= start_offset + 1 {
        return chosen.to_vec();
    }

    // Seed gene: a random position within the mutable region.
    let seed_pos = rng.random_range(start_offset..n);
    let mut out: Vec<usize> = Vec::with_capacity(n - start_offset);
    out.push(chosen[seed_pos]);

    // Unplaced pool: the chosen parent's remaining mutable genes.
    let mut unplaced: Vec<usize> = chosen[start_offset..]
        .iter()
        .copied()
        .filter(|&c| c != chosen[seed_pos])
        .collect();

    while unplaced.len() > 1 {
        let last = *out.last().expect("out is never empty");
        let n1 = find_next(chosen, last, start_offset);
        let n2 = find_next(other, last, start_offset);

        let (picked, fallback) = match (n1, n2) {
            (None, _) => (n2, n1),
            (_, None) => (n1, n2),
            (Some(a), Some(b)) => {
                if problem.distance(last, a) < problem.distance(last, b) {
                    (n1, n2)
                } else {
                    (n2, n1)
                }
            }
        };

        let available = |c: &Option<usize>| c.is_some_and(|c| unplaced.contains(&c));
        let next = if available(&picked) {
            picked.expect("checked is_some")
        } else if available(&fallback) {
            fallback.expect("checked is_some")
        } else {
            // Both parental edges close a cycle: random unplaced city.
            unplaced[rng.random_range(0..unplaced.len())]
        };

        out.push(next);
        let pos = unplaced
            .iter()
            .position(|&c| c == next)
            .expect("next is drawn from unplaced");
        unplaced.swap_remove(pos);
    }
    out.push(unplaced[0]);

    // Fixed prefix, then the grown body.
    let mut child = chosen[..start_offset].to_vec();
    child.extend(out);
    child
}

/// Finds the gene immediately following `city` within a parent's mutable
/// region, or `None` if `city` is the parent's last gene.
fn find_next(genes: &[usize], city: usize, start_offset: usize) -> Option<usize> {
    (start_offset..genes.len().saturating_sub(1))
        .find(|&i| genes[i] == city)
        .map(|i| genes[i + 1])
}
