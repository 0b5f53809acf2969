//! Immutable location catalog.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Location;
use crate::error::ConfigError;

/// The fixed set of locations an itinerary must visit.
///
/// Itineraries refer to locations by their *index* in the catalog
/// (`0..len()`), which keeps permutations dense regardless of the IDs the
/// input provider assigned. Use [`Catalog::ids_of`] to translate back.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Catalog, Location, TimeWindow};
///
/// let tw = TimeWindow::new(0, 600).unwrap();
/// let catalog = Catalog::new(vec![
///     Location::new(7, 0.0, 0.0, 30, tw),
///     Location::new(3, 5.0, 0.0, 30, tw),
/// ])
/// .unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.ids_of(&[1, 0]), vec![3, 7]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Location>", into = "Vec<Location>")]
pub struct Catalog {
    locations: Vec<Location>,
}

impl Catalog {
    /// Creates a catalog, rejecting duplicate IDs and non-finite coordinates.
    pub fn new(locations: Vec<Location>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::with_capacity(locations.len());
        for loc in &locations {
            if !loc.has_finite_coordinates() {
                return Err(ConfigError::NonFiniteCoordinate {
                    id: loc.id(),
                    x: loc.x(),
                    y: loc.y(),
                });
            }
            if !seen.insert(loc.id()) {
                return Err(ConfigError::DuplicateLocationId(loc.id()));
            }
        }
        Ok(Self { locations })
    }

    /// All locations in catalog order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Location at catalog index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn get(&self, index: usize) -> &Location {
        &self.locations[index]
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if the catalog has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Maps a sequence of catalog indices to location IDs.
    pub fn ids_of(&self, order: &[usize]) -> Vec<usize> {
        order.iter().map(|&i| self.locations[i].id()).collect()
    }
}

impl TryFrom<Vec<Location>> for Catalog {
    type Error = ConfigError;

    fn try_from(locations: Vec<Location>) -> Result<Self, Self::Error> {
        Self::new(locations)
    }
}

impl From<Catalog> for Vec<Location> {
    fn from(catalog: Catalog) -> Self {
        catalog.locations
    }
}
