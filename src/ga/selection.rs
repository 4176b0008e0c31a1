//! Elitist truncation selection with duplication.

use crate::models::Tour;

/// Selects the next population from a candidate pool.
///
/// Ranks the pool by fitness ascending (lower cost first), keeps the top
/// `ceil(population_size * elite_fraction)` *distinct* individuals (tours
/// with an identical gene sequence count once), then refills the
/// remaining slots by duplicating from that elite set until the
/// population size is restored. If the pool holds fewer distinct tours
/// than the elite size, the refill cycles over what there is.
///
/// # Panics
///
/// Panics if the pool is empty.
///
/// # Examples
///
/// ```
/// use tsp_evo::ga::selection::truncate_with_duplication;
/// use tsp_evo::models::Tour;
///
/// let mut pool = Vec::new();
/// for (i, f) in [30.0, 10.0, 20.0, 40.0].iter().enumerate() {
///     let mut t = Tour::new(vec![0, 1 + i]);
///     t.set_fitness(*f);
///     pool.push(t);
/// }
/// let next = truncate_with_duplication(pool, 4, 0.25);
/// // Elite of 1: everything is a copy of the best (fitness 10).
/// assert!(next.iter().all(|t| t.fitness() == 10.0));
/// ```
pub fn truncate_with_duplication(
    mut pool: Vec<Tour>,
    population_size: usize,
    elite_fraction: f64,
) -> Vec<Tour> {
    assert!(!pool.is_empty(), "cannot select from an empty pool");

    pool.sort_by(|a, b| {
        a.fitness()
            .partial_cmp(&b.fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let elite_count = ((population_size as f64 * elite_fraction).ceil() as usize)
        .clamp(1, pool.len());

    // Gene-identical copies (left over from a previous refill) count once,
    // so duplicates of the best cannot crowd runners-up out of the elite.
    let mut next: Vec<Tour> = Vec::with_capacity(population_size);
    for tour in pool {
        if next.len() == elite_count {
            break;
        }
        if next.iter().any(|kept| kept.cities() == tour.cities()) {
            continue;
        }
        next.push(tour);
    }

    let kept = next.len();
    let mut idx = 0;
    while next.len() < population_size {
        let duplicate = next[idx % kept].clone();
        next.push(duplicate);
        idx += 1;
    }
    next.truncate(population_size);
    next
}
