//! Day-by-day schedule of an itinerary.
//!
//! This walk is for presentation only and intentionally differs from the
//! fitness model in [`evaluation`](crate::evaluation):
//!
//! - windows are compared against the time of day (`clock mod day`), so a
//!   window reopens every day;
//! - a visit arriving after its window has closed is *deferred* to the
//!   window's opening on the next day instead of being penalized.
//!
//! The two models can therefore rank the same itinerary differently. Search
//! always uses the fitness model.

use std::fmt;

use crate::distance::cost;
use crate::evaluation::FitnessParams;
use crate::models::Catalog;

/// A clock reading rendered as `Day N, HH:MM`.
///
/// # Examples
///
/// ```
/// use u_itinerary::evaluation::FitnessParams;
/// use u_itinerary::report::ClockTime;
///
/// let params = FitnessParams::default();
/// assert_eq!(ClockTime::new(0.0, &params).to_string(), "Day 1, 07:00");
/// assert_eq!(ClockTime::new(1045.4, &params).to_string(), "Day 2, 00:25");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockTime {
    minutes: f64,
    day_start_offset: f64,
    minutes_per_day: f64,
}

impl ClockTime {
    pub fn new(minutes: f64, params: &FitnessParams) -> Self {
        Self {
            minutes,
            day_start_offset: params.day_start_offset,
            minutes_per_day: params.minutes_per_day,
        }
    }

    /// Raw clock value in minutes since the run origin.
    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    /// Zero-based day index.
    pub fn day(&self) -> u64 {
        self.absolute() / self.minutes_per_day.round() as u64
    }

    fn absolute(&self) -> u64 {
        (self.day_start_offset + self.minutes).round().max(0.0) as u64
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let per_day = self.minutes_per_day.round() as u64;
        let total = self.absolute();
        let of_day = total % per_day;
        write!(
            f,
            "Day {}, {:02}:{:02}",
            total / per_day + 1,
            of_day / 60,
            of_day % 60
        )
    }
}

/// One visit in a [`Schedule`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledVisit {
    /// Catalog index.
    pub index: usize,
    pub location_id: usize,
    pub arrival: ClockTime,
    /// Minutes between arrival and start, including any deferral.
    pub wait: f64,
    pub start: ClockTime,
    pub departure: ClockTime,
    /// Arrived after the window closed and was moved to the next day.
    pub deferred: bool,
    /// Night rest was taken after this visit.
    pub night_rest: bool,
}

impl fmt::Display for ScheduledVisit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Location {} | Arrives: {} | Waits: {} min | Starts: {} | Leaves: {}",
            self.location_id,
            self.arrival,
            self.wait.round() as i64,
            self.start,
            self.departure
        )?;
        if self.deferred {
            write!(f, " | deferred")?;
        }
        Ok(())
    }
}

/// A presentation-level timeline for an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub visits: Vec<ScheduledVisit>,
    pub total_distance: f64,
    /// Clock after the last visit.
    pub end_clock: f64,
}

impl Schedule {
    /// Number of visits moved to a later day.
    pub fn deferrals(&self) -> usize {
        self.visits.iter().filter(|v| v.deferred).count()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for visit in &self.visits {
            writeln!(f, "{visit}")?;
        }
        write!(f, "Total distance: {:.2}", self.total_distance)
    }
}

/// Builds the day-by-day schedule for `order` (catalog indices).
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Catalog, Location, TimeWindow};
/// use u_itinerary::evaluation::FitnessParams;
/// use u_itinerary::report::build_schedule;
///
/// let catalog = Catalog::new(vec![
///     Location::new(0, 0.0, 0.0, 60, TimeWindow::new(60, 300).unwrap()),
///     Location::new(1, 30.0, 40.0, 30, TimeWindow::new(0, 100).unwrap()),
/// ])
/// .unwrap();
/// let schedule = build_schedule(&[0, 1], &catalog, &FitnessParams::default());
///
/// // 60 wait + 60 service + 50 travel + 15 buffer = 185 > 100
/// assert!(schedule.visits[1].deferred);
/// assert_eq!(schedule.visits[1].start.to_string(), "Day 2, 07:00");
/// ```
pub fn build_schedule(order: &[usize], catalog: &Catalog, params: &FitnessParams) -> Schedule {
    let mut visits = Vec::with_capacity(order.len());
    let mut clock = 0.0;
    let mut total_distance = 0.0;
    let mut prev: Option<usize> = None;

    for &idx in order {
        let loc = catalog.get(idx);
        if let Some(from) = prev {
            let travel = cost(catalog.get(from), loc);
            total_distance += travel;
            clock += travel + params.buffer;
        }
        let arrival = clock;

        let tw = loc.time_window();
        let open = f64::from(tw.open());
        let close = f64::from(tw.close());
        let of_day = clock.rem_euclid(params.minutes_per_day);

        let (wait, deferred) = if of_day < open {
            (open - of_day, false)
        } else if of_day > close {
            (params.minutes_per_day - of_day + open, true)
        } else {
            (0.0, false)
        };

        clock += wait;
        let start = clock;
        clock += f64::from(loc.service_duration());
        let departure = clock;

        let night_rest = params.needs_night_rest(clock);
        if night_rest {
            clock += params.night_rest_duration;
        }

        visits.push(ScheduledVisit {
            index: idx,
            location_id: loc.id(),
            arrival: ClockTime::new(arrival, params),
            wait,
            start: ClockTime::new(start, params),
            departure: ClockTime::new(departure, params),
            deferred,
            night_rest,
        });
        prev = Some(idx);
    }

    Schedule {
        visits,
        total_distance,
        end_clock: clock,
    }
}
