//! Permutation crossover and mutation operators.
//!
//! These operate on `&[usize]` city-index permutations.
//!
//! - [`order_crossover`] (OX): Davis (1985), preserves relative order
//! - [`swap_mutate`]: per-position swap with a uniformly random partner
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use super::config::validate_rate;
use super::types::check_permutation;
use crate::error::{GaError, Result};
use rand::seq::index;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX) producing a single child.
///
/// # Algorithm
///
/// 1. Draw two distinct cut points in `0..n` and sort them so `start < end`
/// 2. Copy `parent1[start..end]` to the same positions of the child
/// 3. Fill the remaining positions, beginning at `end` and wrapping to 0,
///    with the cities of `parent2` in `parent2`'s order, skipping cities
///    already copied
///
/// # Errors
///
/// - [`GaError::InvalidConfig`] if the parents hold fewer than 2 cities
/// - [`GaError::InvariantViolation`] if the parents are not permutations of
///   the same length
///
/// # Complexity
/// O(n) time, O(n) space
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> Result<Vec<usize>> {
    let n = parent1.len();
    if n < 2 {
        return Err(GaError::InvalidConfig(format!(
            "order crossover needs at least 2 cities, got {n}"
        )));
    }
    let (start, end) = random_cut_points(n, rng);
    order_crossover_with_cuts(parent1, parent2, start, end)
}

/// OX with explicit cut points: the segment is `parent1[start..end]`.
///
/// # Errors
///
/// - [`GaError::InvalidConfig`] unless `start < end <= n`
/// - [`GaError::InvariantViolation`] if the parents are not permutations of
///   the same length
///
/// # Examples
///
/// ```
/// use tsp_ga::ga::operators::order_crossover_with_cuts;
///
/// let p1 = [0, 1, 2, 3, 4, 5, 6, 7];
/// let p2 = [7, 6, 5, 4, 3, 2, 1, 0];
/// let child = order_crossover_with_cuts(&p1, &p2, 2, 5).unwrap();
/// assert_eq!(child, vec![1, 0, 2, 3, 4, 7, 6, 5]);
/// ```
pub fn order_crossover_with_cuts(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Result<Vec<usize>> {
    let n = parent1.len();
    if parent2.len() != n {
        return Err(GaError::InvariantViolation(format!(
            "parents differ in length: {n} vs {}",
            parent2.len()
        )));
    }
    if start >= end || end > n {
        return Err(GaError::InvalidConfig(format!(
            "invalid cut points {start}..{end} for {n} cities"
        )));
    }
    check_permutation(parent1, n)?;
    check_permutation(parent2, n)?;

    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    // Step 1: segment from parent1
    for i in start..end {
        child[i] = parent1[i];
        in_segment[parent1[i]] = true;
    }

    // Step 2: fill from parent2, writing after the segment and wrapping
    let mut pos = end;
    for &city in parent2 {
        if in_segment[city] {
            continue;
        }
        if pos >= n {
            pos = 0;
        }
        child[pos] = city;
        pos += 1;
    }

    Ok(child)
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: each position, with probability `rate`, trades places
/// with a uniformly random position (possibly itself).
///
/// A rate of 0 never swaps; the permutation is always preserved.
///
/// # Errors
/// [`GaError::InvalidConfig`] if `rate` is outside `[0, 1]` or NaN.
///
/// # Complexity
/// O(n)
pub fn swap_mutate<R: Rng>(perm: &mut [usize], rate: f64, rng: &mut R) -> Result<()> {
    validate_rate(rate)?;
    let n = perm.len();
    for i in 0..n {
        if rng.random::<f64>() < rate {
            let j = rng.random_range(0..n);
            perm.swap(i, j);
        }
    }
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Two distinct positions in `0..n`, returned as `(start, end)` with
/// `start < end`. Requires `n >= 2`.
fn random_cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let picked = index::sample(rng, n, 2);
    let (a, b) = (picked.index(0), picked.index(1));
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
