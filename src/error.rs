//! Configuration errors.
//!
//! Every error here is raised before an optimization run starts. Once a
//! [`GaRunner`](crate::ga::GaRunner) has been built, no operation inside the
//! generational loop can fail.

/// Rejected input data or algorithm configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("InvalidTimeWindow: open must not exceed close. open = {open}, close = {close}")]
    InvalidTimeWindow { open: u32, close: u32 },

    #[error("NonFiniteCoordinate: location {id} has coordinate ({x}, {y})")]
    NonFiniteCoordinate { id: usize, x: f64, y: f64 },

    #[error("DuplicateLocationId: id {0} appears more than once in the catalog")]
    DuplicateLocationId(usize),

    #[error("EmptyPopulation: population size must be at least 1")]
    EmptyPopulation,

    #[error("InvalidTournamentSize: tournament size must be in 1..={population_size}, got {tournament_size}")]
    InvalidTournamentSize {
        tournament_size: usize,
        population_size: usize,
    },

    #[error("RateOutOfRange: {name} must be between 0.0 and 1.0, got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    #[error("InvalidFitnessParameter: {name} must be finite and non-negative, got {value}")]
    InvalidFitnessParameter { name: &'static str, value: f64 },

    #[error("InvalidDayLength: night rest threshold {threshold} must fall inside a day of {minutes_per_day} minutes")]
    InvalidDayLength {
        threshold: f64,
        minutes_per_day: f64,
    },
}

impl ConfigError {
    pub(crate) fn rate(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(value)
        } else {
            Err(Self::RateOutOfRange { name, value })
        }
    }

    pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::InvalidFitnessParameter { name, value })
        }
    }
}
