//! Location and time window types.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A visiting window in integer minutes from the day start.
///
/// A visit may *begin* anywhere in `[open, close]` without penalty. Arriving
/// before `open` means waiting; arriving after `close` is late.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::TimeWindow;
///
/// let tw = TimeWindow::new(60, 300).unwrap();
/// assert!(tw.contains(300.0));
/// assert_eq!(tw.lateness(301.0), 1.0);
/// assert!(TimeWindow::new(300, 60).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeWindow", into = "RawTimeWindow")]
pub struct TimeWindow {
    open: u32,
    close: u32,
}

#[derive(Serialize, Deserialize)]
struct RawTimeWindow {
    open: u32,
    close: u32,
}

impl TryFrom<RawTimeWindow> for TimeWindow {
    type Error = ConfigError;

    fn try_from(raw: RawTimeWindow) -> Result<Self, Self::Error> {
        Self::new(raw.open, raw.close)
    }
}

impl From<TimeWindow> for RawTimeWindow {
    fn from(tw: TimeWindow) -> Self {
        Self {
            open: tw.open,
            close: tw.close,
        }
    }
}

impl TimeWindow {
    /// Creates a new time window.
    ///
    /// Returns [`ConfigError::InvalidTimeWindow`] if `open > close`.
    pub fn new(open: u32, close: u32) -> Result<Self, ConfigError> {
        if open > close {
            return Err(ConfigError::InvalidTimeWindow { open, close });
        }
        Ok(Self { open, close })
    }

    /// Earliest penalty-free start.
    pub fn open(&self) -> u32 {
        self.open
    }

    /// Latest penalty-free start.
    pub fn close(&self) -> u32 {
        self.close
    }

    /// Returns `true` if a visit may begin at `time` without waiting or penalty.
    pub fn contains(&self, time: f64) -> bool {
        time >= f64::from(self.open) && time <= f64::from(self.close)
    }

    /// Minutes to wait when arriving at `time`. Zero once the window is open.
    pub fn waiting_time(&self, time: f64) -> f64 {
        (f64::from(self.open) - time).max(0.0)
    }

    /// Minutes past `close` when starting at `time`. Zero if not late.
    pub fn lateness(&self, time: f64) -> f64 {
        (time - f64::from(self.close)).max(0.0)
    }
}

/// A stop to be visited exactly once.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Location, TimeWindow};
///
/// let tw = TimeWindow::new(60, 300).unwrap();
/// let a = Location::new(0, 0.0, 0.0, 60, tw);
/// let b = Location::new(1, 3.0, 4.0, 45, tw);
/// assert_eq!(a.distance_to(&b), 5.0);
/// assert_eq!(b.service_duration(), 45);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    id: usize,
    x: f64,
    y: f64,
    service_duration: u32,
    time_window: TimeWindow,
}

impl Location {
    /// Creates a new location.
    pub fn new(id: usize, x: f64, y: f64, service_duration: u32, time_window: TimeWindow) -> Self {
        Self {
            id,
            x,
            y,
            service_duration,
            time_window,
        }
    }

    /// Location ID, unique within a catalog.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Minutes spent on site once the visit begins.
    pub fn service_duration(&self) -> u32 {
        self.service_duration
    }

    /// Allowed start window.
    pub fn time_window(&self) -> &TimeWindow {
        &self.time_window
    }

    /// Euclidean distance to another location.
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub(crate) fn has_finite_coordinates(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
