//! Itinerary fitness evaluation.
//!
//! # Time model
//!
//! The visit sequence is simulated on a single running clock that starts
//! at 0. For each stop:
//!
//! ```text
//! clock += travel(prev, loc) + buffer          (skipped for the first stop)
//! clock  = max(clock, open)                    (wait, free)
//! penalty += max(0, clock - close) * weight    (late, visit still happens)
//! clock += service_duration
//! if time_of_day(clock) >= night threshold: clock += night rest
//! ```
//!
//! Fitness is `-(total_distance + penalty)`: higher is better. Lateness is a
//! soft constraint, so every permutation has a finite score.

use crate::distance::DistanceMatrix;
use crate::models::Catalog;

use super::FitnessParams;

/// Timing of one stop in a simulated itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedStop {
    /// Catalog index of the location.
    pub index: usize,
    /// Clock on arrival, after travel and buffer.
    pub arrival: f64,
    /// Clock when service begins, after any waiting.
    pub start: f64,
    /// Minutes past the window's close at `start`.
    pub lateness: f64,
    /// Penalty charged for this stop.
    pub penalty: f64,
    /// Clock when service ends.
    pub departure: f64,
    /// Whether night rest was taken after this stop.
    pub night_rest: bool,
    /// Clock after this stop, including any night rest.
    pub clock_after: f64,
}

/// Full trace of one fitness simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    pub stops: Vec<SimulatedStop>,
    pub total_distance: f64,
    pub penalty: f64,
    /// Clock after the last stop.
    pub end_clock: f64,
}

impl Simulation {
    /// Fitness of the simulated itinerary (higher is better).
    pub fn fitness(&self) -> f64 {
        -(self.total_distance + self.penalty)
    }

    /// Number of night rests taken.
    pub fn night_rests(&self) -> usize {
        self.stops.iter().filter(|s| s.night_rest).count()
    }
}

#[derive(Debug, Default)]
struct Totals {
    distance: f64,
    penalty: f64,
    clock: f64,
}

/// Scores visiting orders over a fixed catalog.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Catalog, Location, TimeWindow};
/// use u_itinerary::evaluation::{FitnessParams, ItineraryEvaluator};
///
/// let tw = TimeWindow::new(0, 10_000).unwrap();
/// let catalog = Catalog::new(vec![
///     Location::new(0, 0.0, 0.0, 0, tw),
///     Location::new(1, 10.0, 0.0, 0, tw),
///     Location::new(2, 20.0, 0.0, 0, tw),
/// ])
/// .unwrap();
/// let evaluator = ItineraryEvaluator::new(&catalog, FitnessParams::default());
///
/// assert_eq!(evaluator.evaluate(&[0, 1, 2]), -20.0);
/// assert_eq!(evaluator.evaluate(&[0, 2, 1]), -30.0);
/// ```
#[derive(Debug, Clone)]
pub struct ItineraryEvaluator<'a> {
    catalog: &'a Catalog,
    distances: DistanceMatrix,
    params: FitnessParams,
}

impl<'a> ItineraryEvaluator<'a> {
    /// Creates an evaluator, precomputing the catalog's cost matrix.
    pub fn new(catalog: &'a Catalog, params: FitnessParams) -> Self {
        Self {
            catalog,
            distances: DistanceMatrix::from_catalog(catalog),
            params,
        }
    }

    /// The catalog being scored against.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// The time-model parameters in use.
    pub fn params(&self) -> &FitnessParams {
        &self.params
    }

    /// The precomputed cost matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Fitness of a visiting order given as catalog indices.
    ///
    /// An empty order scores 0.
    pub fn evaluate(&self, order: &[usize]) -> f64 {
        let totals = self.walk(order, |_| {});
        -(totals.distance + totals.penalty)
    }

    /// Runs the same walk as [`evaluate`](Self::evaluate), keeping per-stop timing.
    pub fn simulate(&self, order: &[usize]) -> Simulation {
        let mut stops = Vec::with_capacity(order.len());
        let totals = self.walk(order, |stop| stops.push(stop));
        Simulation {
            stops,
            total_distance: totals.distance,
            penalty: totals.penalty,
            end_clock: totals.clock,
        }
    }

    fn walk<F: FnMut(SimulatedStop)>(&self, order: &[usize], mut on_stop: F) -> Totals {
        let p = &self.params;
        let mut totals = Totals::default();
        let mut prev: Option<usize> = None;

        for &idx in order {
            let loc = self.catalog.get(idx);
            let tw = loc.time_window();

            if let Some(from) = prev {
                let travel = self.distances.get(from, idx);
                totals.distance += travel;
                totals.clock += travel + p.buffer;
            }
            let arrival = totals.clock;

            totals.clock += tw.waiting_time(totals.clock);
            let start = totals.clock;

            let lateness = tw.lateness(start);
            let penalty = lateness * p.penalty_weight;
            totals.penalty += penalty;

            totals.clock += f64::from(loc.service_duration());
            let departure = totals.clock;

            let night_rest = p.needs_night_rest(totals.clock);
            if night_rest {
                totals.clock += p.night_rest_duration;
            }

            on_stop(SimulatedStop {
                index: idx,
                arrival,
                start,
                lateness,
                penalty,
                departure,
                night_rest,
                clock_after: totals.clock,
            });
            prev = Some(idx);
        }

        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, TimeWindow};

    fn wide() -> TimeWindow {
        TimeWindow::new(0, 10_000).expect("valid")
    }

    fn line_catalog() -> Catalog {
        Catalog::new(vec![
            Location::new(0, 0.0, 0.0, 0, wide()),
            Location::new(1, 10.0, 0.0, 0, wide()),
            Location::new(2, 20.0, 0.0, 0, wide()),
        ])
        .expect("valid")
    }

    #[test]
    fn test_empty_itinerary() {
        let catalog = line_catalog();
        let eval = ItineraryEvaluator::new(&catalog, FitnessParams::default());
        assert_eq!(eval.evaluate(&[]), 0.0);
        let sim = eval.simulate(&[]);
        assert!(sim.stops.is_empty());
        assert_eq!(sim.end_clock, 0.0);
    }

    #[test]
    fn test_single_location_no_travel() {
        let catalog = line_catalog();
        let eval = ItineraryEvaluator::new(&catalog, FitnessParams::default());
        assert_eq!(eval.evaluate(&[2]), 0.0);
        let sim = eval.simulate(&[2]);
        assert_eq!(sim.total_distance, 0.0);
        assert_eq!(sim.stops[0].arrival, 0.0);
    }

    #[test]
    fn test_line_distances() {
        let catalog = line_catalog();
        let eval = ItineraryEvaluator::new(&catalog, FitnessParams::default());
        assert_eq!(eval.evaluate(&[0, 1, 2]), -20.0);
        assert_eq!(eval.evaluate(&[2, 1, 0]), -20.0);
        assert_eq!(eval.evaluate(&[1, 0, 2]), -30.0);
    }

    #[test]
    fn test_buffer_affects_clock_not_distance() {
        let catalog = line_catalog();
        let eval = ItineraryEvaluator::new(&catalog, FitnessParams::default());
        let sim = eval.simulate(&[0, 1, 2]);
        assert_eq!(sim.total_distance, 20.0);
        // two legs of 10 minutes + two 15 minute buffers
        assert_eq!(sim.end_clock, 50.0);
        assert_eq!(sim.stops[1].arrival, 25.0);
    }

    #[test]
    fn test_waiting_is_free() {
        let late_open = TimeWindow::new(100, 200).expect("valid");
        let catalog = Catalog::new(vec![
            Location::new(0, 0.0, 0.0, 30, wide()),
            Location::new(1, 10.0, 0.0, 20, late_open),
        ])
        .expect("valid");
        let eval = ItineraryEvaluator::new(&catalog, FitnessParams::default());
        let sim = eval.simulate(&[0, 1]);
        // 30 service + 10 travel + 15 buffer = 55, wait until 100
        assert_eq!(sim.stops[1].arrival, 55.0);
        assert_eq!(sim.stops[1].start, 100.0);
        assert_eq!(sim.stops[1].departure, 120.0);
        assert_eq!(sim.penalty, 0.0);
        assert_eq!(sim.fitness(), -10.0);
    }

    #[test]
    fn test_arrival_at_close_is_free() {
        // service 45 at stop 0, travel 10, buffer 15 -> arrive at 70
        let catalog = Catalog::new(vec![
            Location::new(0, 0.0, 0.0, 45, wide()),
            Location::new(1, 10.0, 0.0, 0, TimeWindow::new(0, 70).expect("valid")),
        ])
        .expect("valid");
        let eval = ItineraryEvaluator::new(&catalog, FitnessParams::default());
        let sim = eval.simulate(&[0, 1]);
        assert_eq!(sim.stops[1].start, 70.0);
        assert_eq!(sim.penalty, 0.0);
    }

    #[test]
    fn test_arrival_one_past_close() {
        let catalog = Catalog::new(vec![
            Location::new(0, 0.0, 0.0, 46, wide()),
            Location::new(1, 10.0, 0.0, 0, TimeWindow::new(0, 70).expect("valid")),
        ])
        .expect("valid");
        let eval = ItineraryEvaluator::new(&catalog, FitnessParams::default());
        let sim = eval.simulate(&[0, 1]);
        assert_eq!(sim.stops[1].lateness, 1.0);
        assert_eq!(sim.penalty, 10.0);
        assert_eq!(eval.evaluate(&[0, 1]), -20.0);
    }

    #[test]
    fn test_lateness_does_not_reset_clock() {
        let catalog = Catalog::new(vec![
            Location::new(0, 0.0, 0.0, 100, wide()),
            Location::new(1, 10.0, 0.0, 5, TimeWindow::new(0, 50).expect("valid")),
        ])
        .expect("valid");
        let eval = ItineraryEvaluator::new(&catalog, FitnessParams::default());
        let sim = eval.simulate(&[0, 1]);
        // arrive at 125, 75 minutes late, served anyway
        assert_eq!(sim.stops[1].start, 125.0);
        assert_eq!(sim.stops[1].departure, 130.0);
        assert_eq!(sim.penalty, 750.0);
    }

    #[test]
    fn test_night_rest_after_threshold() {
        // 07:00 + 960 = 23:00
        let catalog = Catalog::new(vec![
            Location::new(0, 0.0, 0.0, 950, wide()),
            Location::new(1, 10.0, 0.0, 30, wide()),
            Location::new(2, 20.0, 0.0, 0, wide()),
        ])
        .expect("valid");
        let eval = ItineraryEvaluator::new(&catalog, FitnessParams::default());
        let sim = eval.simulate(&[0, 1, 2]);

        assert!(!sim.stops[0].night_rest);
        assert_eq!(sim.stops[0].clock_after, 950.0);

        // 950 + 25 travel/buffer + 30 service = 1005 (23:45)
        assert_eq!(sim.stops[1].departure, 1005.0);
        assert!(sim.stops[1].night_rest);
        assert_eq!(sim.stops[1].clock_after, 1005.0 + 480.0);

        assert_eq!(sim.stops[2].arrival, 1485.0 + 25.0);
        assert_eq!(sim.night_rests(), 1);
        // night rest never changes distance
        assert_eq!(sim.total_distance, 20.0);
    }

    #[test]
    fn test_night_rest_not_triggered_after_midnight() {
        // departure at 1030 is 00:10 the next day
        let catalog = Catalog::new(vec![Location::new(0, 0.0, 0.0, 1030, wide())])
            .expect("valid");
        let eval = ItineraryEvaluator::new(&catalog, FitnessParams::default());
        let sim = eval.simulate(&[0]);
        assert!(!sim.stops[0].night_rest);
        assert_eq!(sim.end_clock, 1030.0);
    }

    #[test]
    fn test_night_rest_can_cause_lateness() {
        let catalog = Catalog::new(vec![
            Location::new(0, 0.0, 0.0, 960, wide()),
            Location::new(1, 10.0, 0.0, 0, TimeWindow::new(0, 1000).expect("valid")),
        ])
        .expect("valid");
        let eval = ItineraryEvaluator::new(&catalog, FitnessParams::default());
        let sim = eval.simulate(&[0, 1]);
        // 960 + 480 rest + 25 = 1465, 465 minutes late
        assert_eq!(sim.stops[1].start, 1465.0);
        assert_eq!(sim.penalty, 4650.0);
    }

    #[test]
    fn test_evaluate_matches_simulation() {
        let catalog = line_catalog();
        let eval = ItineraryEvaluator::new(&catalog, FitnessParams::default());
        for order in [[0, 1, 2], [1, 2, 0], [2, 0, 1]] {
            assert_eq!(eval.evaluate(&order), eval.simulate(&order).fitness());
        }
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let catalog = line_catalog();
        let eval = ItineraryEvaluator::new(&catalog, FitnessParams::default());
        let a = eval.evaluate(&[2, 0, 1]);
        let b = eval.evaluate(&[2, 0, 1]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_penalty_weight() {
        let catalog = Catalog::new(vec![
            Location::new(0, 0.0, 0.0, 10, wide()),
            Location::new(1, 0.0, 0.0, 0, TimeWindow::new(0, 20).expect("valid")),
        ])
        .expect("valid");
        let params = FitnessParams::default().with_penalty_weight(2.0);
        let eval = ItineraryEvaluator::new(&catalog, params);
        // arrive at 10 + 0 + 15 = 25, 5 late
        assert_eq!(eval.evaluate(&[0, 1]), -10.0);
    }
}
