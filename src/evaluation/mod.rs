//! Itinerary fitness evaluation.
//!
//! - [`FitnessParams`] — Buffer, penalty weight and night rest constants
//! - [`ItineraryEvaluator`] — Scores a visiting order; optionally traces it

mod evaluator;
mod params;

pub use evaluator::{ItineraryEvaluator, SimulatedStop, Simulation};
pub use params::FitnessParams;
