//! # u-itinerary
//!
//! Single-vehicle itinerary optimization: find a visiting order for a fixed
//! set of locations that minimizes travel while respecting (softly) each
//! location's visiting window and a nightly rest rule.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, TimeWindow, Catalog)
//! - [`distance`] — Euclidean travel cost and cost matrix
//! - [`evaluation`] — Itinerary simulation and fitness
//! - [`ga`] — Genetic algorithm over permutations (tournament, OX, swap, elitism)
//! - [`report`] — Day-by-day schedule rendering of a computed itinerary
//! - [`error`] — Configuration errors
//!
//! ## Example
//!
//! ```
//! use u_itinerary::models::{Catalog, Location, TimeWindow};
//! use u_itinerary::ga::{GaConfig, GaRunner};
//!
//! let tw = TimeWindow::new(0, 10_000).unwrap();
//! let catalog = Catalog::new(vec![
//!     Location::new(0, 0.0, 0.0, 0, tw),
//!     Location::new(1, 20.0, 0.0, 0, tw),
//!     Location::new(2, 10.0, 0.0, 0, tw),
//! ])
//! .unwrap();
//!
//! let config = GaConfig::default().with_seed(1);
//! let result = GaRunner::solve(&catalog, config).unwrap();
//! assert_eq!(result.best_fitness, -20.0);
//! ```

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod models;
pub mod report;

pub use error::ConfigError;
