//! Travel cost model.
//!
//! Euclidean distance between coordinates, read as minutes of travel.

mod matrix;

pub use matrix::{cost, DistanceMatrix};
