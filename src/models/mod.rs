//! Domain model types for itinerary planning.
//!
//! Provides locations with coordinates, service durations and visiting
//! windows, and the immutable catalog an optimization run works over.

mod catalog;
mod location;

pub use catalog::Catalog;
pub use location::{Location, TimeWindow};
