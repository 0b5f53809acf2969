//! Permutation chromosome for itinerary search.
//!
//! An itinerary encodes a complete visiting order as a permutation of
//! catalog indices `0..N`. Every permutation is a valid candidate; the
//! evaluator decides how good it is.

/// A visiting order together with its cached fitness.
///
/// The fitness starts at `f64::NEG_INFINITY` until the individual has been
/// scored. Higher fitness = better itinerary.
///
/// # Examples
///
/// ```
/// use u_itinerary::ga::Itinerary;
///
/// let it = Itinerary::new(vec![2, 0, 1]);
/// assert_eq!(it.order(), &[2, 0, 1]);
/// assert_eq!(it.fitness(), f64::NEG_INFINITY);
/// assert!(it.is_permutation());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    order: Vec<usize>,
    fitness: f64,
}

impl Itinerary {
    /// Creates an unscored itinerary from a visiting order.
    pub fn new(order: Vec<usize>) -> Self {
        Self {
            order,
            fitness: f64::NEG_INFINITY,
        }
    }

    /// Creates an itinerary with a known fitness.
    pub fn with_fitness(order: Vec<usize>, fitness: f64) -> Self {
        Self { order, fitness }
    }

    /// Returns the visiting order as catalog indices.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns a mutable reference to the visiting order.
    pub fn order_mut(&mut self) -> &mut Vec<usize> {
        &mut self.order
    }

    /// Consumes the itinerary, returning its visiting order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Cached fitness.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the itinerary has no stops.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if the order contains each of `0..len()` exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.order.len()];
        for &g in &self.order {
            match seen.get_mut(g) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itinerary_new() {
        let it = Itinerary::new(vec![1, 2, 0]);
        assert_eq!(it.order(), &[1, 2, 0]);
        assert_eq!(it.len(), 3);
        assert!(!it.is_empty());
        assert_eq!(it.fitness(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_itinerary_empty() {
        let it = Itinerary::new(vec![]);
        assert!(it.is_empty());
        assert!(it.is_permutation());
    }

    #[test]
    fn test_itinerary_set_fitness() {
        let mut it = Itinerary::new(vec![0, 1]);
        it.set_fitness(-42.5);
        assert_eq!(it.fitness(), -42.5);
        assert_eq!(Itinerary::with_fitness(vec![0], -1.0).fitness(), -1.0);
    }

    #[test]
    fn test_is_permutation() {
        assert!(Itinerary::new(vec![2, 0, 1]).is_permutation());
        assert!(!Itinerary::new(vec![0, 0, 1]).is_permutation());
        assert!(!Itinerary::new(vec![0, 1, 3]).is_permutation());
    }

    #[test]
    fn test_itinerary_mutate_order() {
        let mut it = Itinerary::new(vec![0, 1, 2]);
        it.order_mut().swap(0, 2);
        assert_eq!(it.into_order(), vec![2, 1, 0]);
    }
}
