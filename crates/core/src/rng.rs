//! RNG module - persistent random piece sequence
//!
//! A [`RandomSequence`] is an immutable node: it carries the current index and
//! enough state to produce the following node. Advancing returns a new node and
//! never touches the old one, so any node can be kept around and replayed.
//!
//! The generator underneath is a plain LCG with Numerical Recipes constants.

use serde::{Deserialize, Serialize};

/// LCG multiplier (Numerical Recipes)
const LCG_MUL: u32 = 1664525;
/// LCG increment (Numerical Recipes)
const LCG_INC: u32 = 1013904223;

/// Advance an LCG state by one step
#[inline]
pub fn lcg_step(state: u32) -> u32 {
    state.wrapping_mul(LCG_MUL).wrapping_add(LCG_INC)
}

/// One node of an infinite index sequence over `[0, max_index]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RandomSequence {
    value: usize,
    state: u32,
    max_index: usize,
}

impl RandomSequence {
    /// First node of the sequence for `seed`
    pub fn new(max_index: usize, seed: u32) -> Self {
        Self::from_state(max_index, lcg_step(seed))
    }

    fn from_state(max_index: usize, state: u32) -> Self {
        // Low LCG bits have short periods; take the index from the high half.
        let value = (state >> 16) as usize % (max_index + 1);
        Self {
            value,
            state,
            max_index,
        }
    }

    /// Index held by this node
    pub fn value(&self) -> usize {
        self.value
    }

    pub fn max_index(&self) -> usize {
        self.max_index
    }

    /// The following node. `self` is left untouched.
    #[must_use]
    pub fn next(&self) -> Self {
        Self::from_state(self.max_index, lcg_step(self.state))
    }

    /// Iterate over indices starting with this node's value
    pub fn values(&self) -> impl Iterator<Item = usize> {
        std::iter::successors(Some(*self), |node| Some(node.next())).map(|node| node.value)
    }
}

/// Build the first node for `seed`
pub fn random_numbers(max_index: usize, seed: u32) -> RandomSequence {
    RandomSequence::new(max_index, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let a = random_numbers(6, 12345);
        let b = random_numbers(6, 12345);

        let xs: Vec<usize> = a.values().take(100).collect();
        let ys: Vec<usize> = b.values().take(100).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_next_does_not_mutate_node() {
        let node = random_numbers(6, 7);
        let before = node;
        let _ = node.next();
        let _ = node.next().next();
        assert_eq!(node, before);
        assert_eq!(node.next(), node.next());
    }

    #[test]
    fn test_values_stay_in_range() {
        let node = random_numbers(6, 0);
        assert!(node.values().take(1000).all(|v| v <= 6));
    }

    #[test]
    fn test_every_index_eventually_drawn() {
        let node = random_numbers(6, 99);
        let mut seen = [false; 7];
        for v in node.values().take(500) {
            seen[v] = true;
        }
        assert!(seen.iter().all(|&s| s), "seen: {:?}", seen);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a: Vec<usize> = random_numbers(6, 1).values().take(20).collect();
        let b: Vec<usize> = random_numbers(6, 2).values().take(20).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_max_index_always_zero() {
        let node = random_numbers(0, 42);
        assert!(node.values().take(10).all(|v| v == 0));
    }
}
