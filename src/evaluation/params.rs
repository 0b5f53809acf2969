//! Constants of the itinerary time model.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Time-model parameters shared by the fitness evaluator and the schedule
/// report.
///
/// All values are minutes except `penalty_weight`, which scales minutes of
/// lateness into cost units. The clock of a simulation starts at 0, which
/// corresponds to `day_start_offset` minutes past midnight.
///
/// # Examples
///
/// ```
/// use u_itinerary::evaluation::FitnessParams;
///
/// let params = FitnessParams::default().with_buffer(0.0);
/// assert_eq!(params.buffer, 0.0);
/// assert_eq!(params.penalty_weight, 10.0);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitnessParams {
    /// Transition minutes added to the clock between consecutive visits.
    pub buffer: f64,
    /// Cost per minute of lateness past a window's close.
    pub penalty_weight: f64,
    /// Minutes past midnight at which the clock reads 0 (07:00).
    pub day_start_offset: f64,
    /// Time of day, in minutes past midnight, from which night rest applies (23:00).
    pub night_rest_threshold: f64,
    /// Downtime injected once the threshold is reached.
    pub night_rest_duration: f64,
    pub minutes_per_day: f64,
}

impl Default for FitnessParams {
    fn default() -> Self {
        Self {
            buffer: 15.0,
            penalty_weight: 10.0,
            day_start_offset: 420.0,
            night_rest_threshold: 1380.0,
            night_rest_duration: 480.0,
            minutes_per_day: 1440.0,
        }
    }
}

impl FitnessParams {
    /// Sets the inter-stop buffer.
    pub fn with_buffer(mut self, buffer: f64) -> Self {
        self.buffer = buffer;
        self
    }

    /// Sets the lateness penalty weight.
    pub fn with_penalty_weight(mut self, weight: f64) -> Self {
        self.penalty_weight = weight;
        self
    }

    /// Sets the clock origin as minutes past midnight.
    pub fn with_day_start_offset(mut self, offset: f64) -> Self {
        self.day_start_offset = offset;
        self
    }

    /// Sets the night rest threshold and duration.
    pub fn with_night_rest(mut self, threshold: f64, duration: f64) -> Self {
        self.night_rest_threshold = threshold;
        self.night_rest_duration = duration;
        self
    }

    /// Checks every parameter is finite and non-negative, and that the
    /// night rest threshold falls inside a day.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::non_negative("buffer", self.buffer)?;
        ConfigError::non_negative("penalty_weight", self.penalty_weight)?;
        ConfigError::non_negative("day_start_offset", self.day_start_offset)?;
        ConfigError::non_negative("night_rest_threshold", self.night_rest_threshold)?;
        ConfigError::non_negative("night_rest_duration", self.night_rest_duration)?;
        ConfigError::non_negative("minutes_per_day", self.minutes_per_day)?;
        if self.minutes_per_day == 0.0 || self.night_rest_threshold >= self.minutes_per_day {
            return Err(ConfigError::InvalidDayLength {
                threshold: self.night_rest_threshold,
                minutes_per_day: self.minutes_per_day,
            });
        }
        Ok(())
    }

    /// Minutes past midnight for a clock reading.
    pub fn time_of_day(&self, clock: f64) -> f64 {
        (self.day_start_offset + clock).rem_euclid(self.minutes_per_day)
    }

    /// Returns `true` if a clock reading falls at or after the night threshold.
    pub fn needs_night_rest(&self, clock: f64) -> bool {
        self.time_of_day(clock) >= self.night_rest_threshold
    }
}
