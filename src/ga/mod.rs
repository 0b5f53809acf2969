//! Genetic algorithm over visiting orders.
//!
//! - [`Itinerary`] — Permutation chromosome with cached fitness
//! - [`operators`] — Tournament selection, order crossover, swap mutation
//! - [`GaConfig`] — Run parameters
//! - [`GaRunner`] — Generational driver with elitism

mod chromosome;
mod config;
pub mod operators;
mod runner;

pub use chromosome::Itinerary;
pub use config::GaConfig;
pub use operators::{
    order_crossover, order_crossover_with_cuts, random_permutation, swap_mutation,
    tournament_select,
};
pub use runner::{GaResult, GaRunner, GenerationStats, RunState};
