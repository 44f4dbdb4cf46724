//! Variation operators that keep the start fixed at position 0.
//!
//! # Operators
//!
//! - **Crossover**: order-preserving cut-and-fill: prefix of parent 1's tail,
//!   then parent 2's tail in order, skipping duplicates
//! - **Mutation**: at most one swap of two positions after the start

use rand::Rng;

/// Produces one child from two parents sharing the same start element.
///
/// A cut index is drawn uniformly from `0..tail_len`; the child's tail is
/// parent 1's tail up to the cut, followed by every element of parent 2's
/// tail not already taken, in parent 2's order. The result is always a
/// permutation of the parents' elements with the start in front.
///
/// Duplicates are tracked with a seen-table indexed by element, so the
/// operator is O(n) rather than O(n²).
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use route_optimizer::ga::ordered_crossover;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let child = ordered_crossover(&[0, 1, 2, 3, 4], &[0, 4, 3, 2, 1], &mut rng);
/// assert_eq!(child[0], 0);
/// let mut sorted = child.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
/// ```
pub fn ordered_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    if parent1.len() < 2 {
        return parent1.to_vec();
    }

    let start = parent1[0];
    let tail1 = &parent1[1..];
    let tail2 = parent2.get(1..).unwrap_or(&[]);
    let cut = rng.random_range(0..tail1.len());

    let table_size = parent1
        .iter()
        .chain(parent2)
        .copied()
        .max()
        .map_or(0, |m| m + 1);
    let mut seen = vec![false; table_size];

    let mut child = Vec::with_capacity(parent1.len());
    child.push(start);
    for &gene in &tail1[..cut] {
        seen[gene] = true;
        child.push(gene);
    }
    for &gene in tail2 {
        if !seen[gene] {
            seen[gene] = true;
            child.push(gene);
        }
    }
    child
}

/// With probability `rate`, swaps two positions drawn uniformly from
/// `1..len` (they may coincide). Returns `true` if a swap was attempted.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use route_optimizer::ga::swap_mutation;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let mut order = vec![0, 1, 2, 3];
/// assert!(!swap_mutation(&mut order, 0.0, &mut rng));
/// assert_eq!(order, vec![0, 1, 2, 3]);
///
/// assert!(swap_mutation(&mut order, 1.0, &mut rng));
/// assert_eq!(order[0], 0);
/// ```
pub fn swap_mutation<R: Rng>(order: &mut [usize], rate: f64, rng: &mut R) -> bool {
    if rng.random::<f64>() >= rate || order.len() < 2 {
        return false;
    }
    let i = rng.random_range(1..order.len());
    let j = rng.random_range(1..order.len());
    order.swap(i, j);
    true
}
