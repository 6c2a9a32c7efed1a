//! Genetic-algorithm solver for the symmetric Traveling Salesman Problem.
//!
//! Given a table of labeled 2-D cities, the solver evolves a population of
//! closed tours and returns the shortest one it encounters.
//!
//! - [`cities`]: City table, Euclidean distance, closed-tour length
//! - [`ga`]: Tournament selection, order crossover, swap mutation and the
//!   generational loop
//! - [`random`]: Seeded generators for reproducible runs
//!
//! # Example
//!
//! ```
//! use tsp_ga::{City, CityTable};
//! use tsp_ga::ga::{GaConfig, GaRunner, ProgressEvent};
//!
//! let table = CityTable::new(vec![
//!     City::new("A", 0.0, 0.0),
//!     City::new("B", 1.0, 5.0),
//!     City::new("C", 2.0, 3.0),
//!     City::new("D", 5.0, 2.0),
//!     City::new("E", 6.0, 6.0),
//! ])
//! .unwrap();
//!
//! let mut events: Vec<ProgressEvent> = Vec::new();
//! let config = GaConfig::default().with_generations(50).with_seed(7);
//! let result = GaRunner::run(&table, &config, &mut events).unwrap();
//!
//! assert_eq!(events.len(), 3); // generations 0, 20, 40
//! println!("{:?} {:.2}", result.best.labels(&table).unwrap(), result.best_length);
//! ```

pub mod cities;
pub mod error;
pub mod ga;
pub mod random;

pub use cities::{City, CityTable};
pub use error::{GaError, Result};
