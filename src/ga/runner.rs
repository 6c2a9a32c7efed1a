//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → selection → crossover → mutation → evaluation → repeat.

use super::config::GaConfig;
use super::operators::{order_crossover, swap_mutate};
use super::progress::{ProgressEvent, ProgressSink};
use super::selection::tournament_select;
use super::types::Tour;
use crate::cities::CityTable;
use crate::error::{GaError, Result};
use crate::random::create_rng;
use rand::seq::SliceRandom;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

/// Result of a GA optimization run.
///
/// With the `serde` feature, deserialization rejects a record whose
/// `best_length` differs from the best tour's length or from the last
/// history entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GaResultRecord"))]
pub struct GaResult {
    /// The best tour found during the entire run, initial population
    /// included.
    pub best: Tour,

    /// Length of the best tour (same as `best.length()`).
    pub best_length: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best-so-far length after the initial population and after each
    /// generation. Never increases.
    pub length_history: Vec<f64>,
}

/// Unchecked wire form of a [`GaResult`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GaResultRecord {
    best: Tour,
    best_length: f64,
    generations: usize,
    length_history: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<GaResultRecord> for GaResult {
    type Error = GaError;

    fn try_from(record: GaResultRecord) -> Result<Self> {
        if record.best_length != record.best.length() {
            return Err(GaError::InvariantViolation(format!(
                "best_length {} does not match best tour length {}",
                record.best_length,
                record.best.length()
            )));
        }
        if record.length_history.last() != Some(&record.best_length) {
            return Err(GaError::InvariantViolation(
                "length_history must end with best_length".into(),
            ));
        }
        Ok(Self {
            best: record.best,
            best_length: record.best_length,
            generations: record.generations,
            length_history: record.length_history,
        })
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use tsp_ga::{City, CityTable};
/// use tsp_ga::ga::{GaConfig, GaRunner};
///
/// let table = CityTable::new(vec![
///     City::new("A", 0.0, 0.0),
///     City::new("B", 1.0, 5.0),
///     City::new("C", 2.0, 3.0),
///     City::new("D", 5.0, 2.0),
/// ])
/// .unwrap();
/// let config = GaConfig::default().with_generations(20).with_seed(42);
///
/// let result = GaRunner::run(&table, &config, &mut ()).unwrap();
/// assert_eq!(result.best.len(), 4);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`, or from a
    /// random seed when none is set.
    pub fn run<S: ProgressSink>(
        table: &CityTable,
        config: &GaConfig,
        sink: &mut S,
    ) -> Result<GaResult> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(table, config, &mut rng, sink)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    ///
    /// # Errors
    ///
    /// - [`GaError::InvalidConfig`] if the configuration is invalid or the
    ///   table holds fewer than 2 cities; raised before any work is done
    /// - [`GaError::InvariantViolation`] if an operator ever yields a tour
    ///   that is not a permutation of the table
    pub fn run_with_rng<R: Rng, S: ProgressSink>(
        table: &CityTable,
        config: &GaConfig,
        rng: &mut R,
        sink: &mut S,
    ) -> Result<GaResult> {
        config.validate()?;
        if table.len() < 2 {
            return Err(GaError::InvalidConfig(format!(
                "at least 2 cities are required, got {}",
                table.len()
            )));
        }

        debug!(
            cities = table.len(),
            population_size = config.population_size,
            generations = config.generations,
            mutation_rate = config.mutation_rate,
            tournament_size = config.tournament_size,
            parallel = config.parallel,
            "starting GA run"
        );

        // 1. Initialize population
        let mut population = initial_population(table, config.population_size, rng)?;

        // 2. Track best
        let mut best = find_best(&population)?.clone();
        let mut length_history = Vec::with_capacity(config.generations + 1);
        length_history.push(best.length());

        // 3. Evolutionary loop
        for gen in 0..config.generations {
            population = next_generation(table, config, &population, rng)?;

            let gen_best = find_best(&population)?;
            if gen_best.length() < best.length() {
                trace!(
                    generation = gen,
                    previous = best.length(),
                    improved = gen_best.length(),
                    "new best tour"
                );
                best = gen_best.clone();
            }

            length_history.push(best.length());

            if gen % config.report_interval == 0 {
                sink.on_progress(ProgressEvent {
                    generation: gen,
                    best_length: best.length(),
                });
            }
        }

        debug!(best_length = best.length(), "GA run finished");

        Ok(GaResult {
            best_length: best.length(),
            best,
            generations: config.generations,
            length_history,
        })
    }
}

/// Creates `pop_size` independent, uniformly random tours.
///
/// Each tour is a Fisher–Yates shuffle of the city indices in table order.
///
/// # Errors
/// [`GaError::InvalidConfig`] if `pop_size == 0`.
pub fn initial_population<R: Rng>(
    table: &CityTable,
    pop_size: usize,
    rng: &mut R,
) -> Result<Vec<Tour>> {
    if pop_size == 0 {
        return Err(GaError::InvalidConfig(
            "population_size must be at least 1".into(),
        ));
    }

    let ordered: Vec<usize> = (0..table.len()).collect();
    (0..pop_size)
        .map(|_| {
            let mut cities = ordered.clone();
            cities.shuffle(rng);
            Tour::evaluated(cities, table)
        })
        .collect()
}

/// Breeds a full replacement population.
///
/// One seed per offspring is drawn from `rng` up front, and each child is
/// built from its own seeded stream, so sequential and parallel runs
/// produce identical populations.
fn next_generation<R: Rng>(
    table: &CityTable,
    config: &GaConfig,
    population: &[Tour],
    rng: &mut R,
) -> Result<Vec<Tour>> {
    let seeds: Vec<u64> = (0..config.population_size).map(|_| rng.random()).collect();

    #[cfg(feature = "parallel")]
    if config.parallel {
        return seeds
            .into_par_iter()
            .map(|seed| breed_offspring(table, config, population, &mut create_rng(seed)))
            .collect();
    }

    seeds
        .into_iter()
        .map(|seed| breed_offspring(table, config, population, &mut create_rng(seed)))
        .collect()
}

/// Select two parents, cross them over, mutate and evaluate the child.
fn breed_offspring<R: Rng>(
    table: &CityTable,
    config: &GaConfig,
    population: &[Tour],
    rng: &mut R,
) -> Result<Tour> {
    let p1 = tournament_select(population, config.tournament_size, rng)?;
    let p2 = tournament_select(population, config.tournament_size, rng)?;

    let mut child = order_crossover(population[p1].cities(), population[p2].cities(), rng)?;
    swap_mutate(&mut child, config.mutation_rate, rng)?;

    Tour::evaluated(child, table)
}

/// Find the shortest tour; the first one wins ties.
fn find_best(population: &[Tour]) -> Result<&Tour> {
    population
        .iter()
        .reduce(|best, tour| if tour.length() < best.length() { tour } else { best })
        .ok_or_else(|| GaError::InvariantViolation("population is empty".into()))
}

// ============================================================================
// Tests
// ============================================================================
