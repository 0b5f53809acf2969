//! Pairwise travel costs.

use crate::models::{Catalog, Location};

/// Travel cost in minutes between two locations.
///
/// Pure and total: a location paired with itself costs zero.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::cost;
/// use u_itinerary::models::{Location, TimeWindow};
///
/// let tw = TimeWindow::new(0, 100).unwrap();
/// let a = Location::new(0, 0.0, 0.0, 0, tw);
/// let b = Location::new(1, 6.0, 8.0, 0, tw);
/// assert_eq!(cost(&a, &b), 10.0);
/// assert_eq!(cost(&a, &a), 0.0);
/// ```
pub fn cost(a: &Location, b: &Location) -> f64 {
    a.distance_to(b)
}

/// A dense n×n cost matrix over catalog indices, stored in row-major order.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Catalog, Location, TimeWindow};
/// use u_itinerary::distance::DistanceMatrix;
///
/// let tw = TimeWindow::new(0, 100).unwrap();
/// let catalog = Catalog::new(vec![
///     Location::new(0, 0.0, 0.0, 0, tw),
///     Location::new(1, 3.0, 4.0, 0, tw),
/// ])
/// .unwrap();
/// let dm = DistanceMatrix::from_catalog(&catalog);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the Euclidean cost matrix for every pair in the catalog.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let n = catalog.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cost(catalog.get(i), catalog.get(j));
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Returns the cost from catalog index `from` to catalog index `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sum of consecutive leg costs along `order`.
    pub fn path_length(&self, order: &[usize]) -> f64 {
        order.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}
