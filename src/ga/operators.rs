//! Permutation-safe genetic operators.
//!
//! Every operator takes the random number generator explicitly so that a
//! run can be reproduced from its seed.
//!
//! - [`random_permutation`] — Uniform shuffle of `0..n`
//! - [`tournament_select`] — Best of `k` distinct random individuals
//! - [`order_crossover`] — Order crossover (OX) keeping a slice of parent 1
//! - [`swap_mutation`] — Exchange two distinct positions
//!
//! # Reference
//!
//! Davis, L. (1985). "Applying adaptive algorithms to epistatic domains",
//! *Proceedings of IJCAI* 85, 162-164.

use rand::seq::{index, SliceRandom};
use rand::Rng;

use super::Itinerary;

/// Returns a uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

/// Tournament selection.
///
/// Samples `k` distinct individuals without replacement and returns the one
/// with the highest fitness. Ties go to the individual sampled first.
///
/// # Panics
///
/// Panics if `k == 0` or `k > population.len()`; the runner validates both
/// before the first generation.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_itinerary::ga::{tournament_select, Itinerary};
///
/// let population = vec![
///     Itinerary::with_fitness(vec![0, 1], -5.0),
///     Itinerary::with_fitness(vec![1, 0], -3.0),
/// ];
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// // with k equal to the population size the best always wins
/// let winner = tournament_select(&population, 2, &mut rng);
/// assert_eq!(winner.fitness(), -3.0);
/// ```
pub fn tournament_select<'p, R: Rng + ?Sized>(
    population: &'p [Itinerary],
    k: usize,
    rng: &mut R,
) -> &'p Itinerary {
    assert!(
        k >= 1 && k <= population.len(),
        "tournament size {k} out of range for population of {}",
        population.len()
    );

    let mut contestants = index::sample(rng, population.len(), k).into_iter();
    // k >= 1, so the first draw always exists
    let mut best = &population[contestants.next().unwrap_or(0)];
    for i in contestants {
        if population[i].fitness() > best.fitness() {
            best = &population[i];
        }
    }
    best
}

/// Order crossover with random cut points.
///
/// Draws two distinct cut points `a < b` from `0..n` and delegates to
/// [`order_crossover_with_cuts`]. Parents shorter than two genes are copied.
pub fn order_crossover<R: Rng + ?Sized>(p1: &[usize], p2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = p1.len();
    if n < 2 {
        return p1.to_vec();
    }
    let cuts = index::sample(rng, n, 2);
    let (x, y) = (cuts.index(0), cuts.index(1));
    order_crossover_with_cuts(p1, p2, x.min(y), x.max(y))
}

/// Order crossover with explicit cut points.
///
/// The child keeps `p1[a..b]` at the same positions. The remaining
/// positions are filled starting at `b` and wrapping to the front, taking
/// the genes of `p2` in their order of appearance and skipping those already
/// copied from `p1`.
///
/// # Panics
///
/// Panics if `a > b`, `b > p1.len()`, or the parents are not permutations of
/// the same length.
///
/// # Examples
///
/// ```
/// use u_itinerary::ga::order_crossover_with_cuts;
///
/// let p1 = [0, 1, 2, 3, 4, 5];
/// let p2 = [5, 4, 3, 2, 1, 0];
/// let child = order_crossover_with_cuts(&p1, &p2, 2, 4);
/// assert_eq!(&child[2..4], &[2, 3]);
/// assert_eq!(child, vec![1, 0, 2, 3, 5, 4]);
/// ```
pub fn order_crossover_with_cuts(p1: &[usize], p2: &[usize], a: usize, b: usize) -> Vec<usize> {
    let n = p1.len();
    assert_eq!(n, p2.len(), "parents must have equal length");
    assert!(a <= b && b <= n, "invalid cut points {a}..{b} for length {n}");

    let mut child: Vec<Option<usize>> = vec![None; n];
    let mut placed = vec![false; n];
    for i in a..b {
        child[i] = Some(p1[i]);
        placed[p1[i]] = true;
    }

    let mut pos = b;
    for &gene in p2 {
        if placed[gene] {
            continue;
        }
        if pos >= n {
            pos = 0;
        }
        child[pos] = Some(gene);
        placed[gene] = true;
        pos += 1;
    }

    child
        .into_iter()
        .map(|g| g.expect("order crossover fills every position"))
        .collect()
}

/// Swaps two distinct, uniformly chosen positions. No-op below two genes.
pub fn swap_mutation<R: Rng + ?Sized>(order: &mut [usize], rng: &mut R) {
    if order.len() < 2 {
        return;
    }
    let picks = index::sample(rng, order.len(), 2);
    order.swap(picks.index(0), picks.index(1));
}
