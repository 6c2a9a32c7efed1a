//! Tournament selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Tour;
use crate::error::{GaError, Result};
use rand::seq::index;
use rand::Rng;

/// Selects a parent index by `k`-way tournament.
///
/// Draws `k` distinct individuals uniformly without replacement and returns
/// the index of the shortest tour among them. Ties go to the candidate drawn
/// first, so the outcome is fixed for a given generator state.
///
/// # Errors
/// [`GaError::InvalidConfig`] if `k == 0` or the population holds fewer
/// than `k` tours.
///
/// # Complexity
/// O(k) per selection
pub fn tournament_select<R: Rng>(
    population: &[Tour],
    k: usize,
    rng: &mut R,
) -> Result<usize> {
    if k == 0 {
        return Err(GaError::InvalidConfig(
            "tournament size must be at least 1".into(),
        ));
    }
    if population.len() < k {
        return Err(GaError::InvalidConfig(format!(
            "population of {} is smaller than tournament size {k}",
            population.len()
        )));
    }

    let mut candidates = index::sample(rng, population.len(), k).into_iter();
    // Non-empty: k >= 1.
    let mut best_idx = candidates.next().unwrap_or(0);
    for idx in candidates {
        if population[idx].length() < population[best_idx].length() {
            best_idx = idx;
        }
    }
    Ok(best_idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cities::{City, CityTable};
    use crate::random::create_rng;

    /// Five cities on a line at x = 0..4.
    fn line_table() -> CityTable {
        CityTable::new(
            (0..5)
                .map(|i| City::new(format!("c{i}"), i as f64, 0.0))
                .collect(),
        )
        .unwrap()
    }

    fn tour(table: &CityTable, cities: &[usize]) -> Tour {
        Tour::evaluated(cities.to_vec(), table).unwrap()
    }

    fn population(table: &CityTable) -> Vec<Tour> {
        vec![
            tour(table, &[0, 2, 1, 3, 4]), // 10
            tour(table, &[0, 1, 2, 3, 4]), // 8
            tour(table, &[0, 1, 3, 2, 4]), // 10
            tour(table, &[0, 2, 4, 1, 3]), // 12
        ]
    }

    #[test]
    fn test_tournament_of_whole_population_picks_best() {
        let table = line_table();
        let pop = population(&table);
        let mut rng = create_rng(42);
        for _ in 0..100 {
            assert_eq!(tournament_select(&pop, 4, &mut rng).unwrap(), 1);
        }
    }

    #[test]
    fn test_tournament_never_picks_worst_with_k3() {
        // Sampling without replacement: the worst tour always loses to one
        // of the other two drawn.
        let table = line_table();
        let pop = population(&table);
        let mut rng = create_rng(7);
        for _ in 0..1000 {
            assert_ne!(tournament_select(&pop, 3, &mut rng).unwrap(), 3);
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let table = line_table();
        let pop = population(&table);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[tournament_select(&pop, 3, &mut rng).unwrap()] += 1;
        }
        // Best is in 3 of the 4 possible draws.
        assert!(
            counts[1] > 6500,
            "expected best selected ~75% of the time, got {counts:?}"
        );
    }

    #[test]
    fn test_tournament_size_1_is_uniform() {
        let table = line_table();
        let pop = population(&table);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament_select(&pop, 1, &mut rng).unwrap()] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_tournament_deterministic_for_seed() {
        let table = line_table();
        let pop = population(&table);
        let picks = |seed| {
            let mut rng = create_rng(seed);
            (0..50)
                .map(|_| tournament_select(&pop, 3, &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(11), picks(11));
    }

    #[test]
    fn test_tie_goes_to_first_drawn() {
        let table = line_table();
        // Rotations and reversal of the same cycle: all length 8.
        let pop = vec![
            tour(&table, &[0, 1, 2, 3, 4]),
            tour(&table, &[1, 2, 3, 4, 0]),
            tour(&table, &[4, 3, 2, 1, 0]),
        ];
        let mut winners = std::collections::HashSet::new();
        for seed in 0..20 {
            let expected = index::sample(&mut create_rng(seed), pop.len(), 3).index(0);
            let picked = tournament_select(&pop, 3, &mut create_rng(seed)).unwrap();
            assert_eq!(picked, expected, "seed {seed}");
            winners.insert(picked);
        }
        // The winner follows the draw order, not the population order.
        assert!(winners.len() > 1, "expected varied winners, got {winners:?}");
    }

    #[test]
    fn test_population_smaller_than_tournament() {
        let table = line_table();
        let pop = population(&table);
        let mut rng = create_rng(42);
        assert!(matches!(
            tournament_select(&pop[..2], 3, &mut rng),
            Err(GaError::InvalidConfig(_))
        ));
        assert!(matches!(
            tournament_select(&pop, 0, &mut rng),
            Err(GaError::InvalidConfig(_))
        ));
    }
}
