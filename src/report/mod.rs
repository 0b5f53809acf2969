//! Presentation of a computed itinerary.
//!
//! - [`ClockTime`] — `Day N, HH:MM` rendering of clock values
//! - [`build_schedule`] — Day-by-day timeline with next-day deferral of late visits

mod schedule;

pub use schedule::{build_schedule, ClockTime, Schedule, ScheduledVisit};
