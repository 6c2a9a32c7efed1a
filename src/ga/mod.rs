//! Genetic Algorithm for the symmetric TSP.
//!
//! A generational GA over city-index permutations. Each generation is
//! replaced wholesale: every offspring comes from two tournament-selected
//! parents, recombined with Order Crossover and then swap-mutated. The best
//! tour ever seen is kept as a side record; there is no elitism.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations, rates)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best tour found and its length history
//! - [`Tour`]: A permutation of the city table with its cached length
//! - [`ProgressSink`]: Receives periodic [`ProgressEvent`]s
//!
//! # Submodules
//!
//! - [`operators`]: Order crossover (OX) and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
pub mod operators;
mod progress;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use operators::{order_crossover, swap_mutate};
pub use progress::{ProgressEvent, ProgressSink, TracingSink};
pub use runner::{initial_population, GaResult, GaRunner};
pub use selection::tournament_select;
pub use types::{check_permutation, Tour};
