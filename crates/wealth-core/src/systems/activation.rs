//! Activation Order
//!
//! Each tick activates every agent exactly once, in a fresh uniformly
//! random order. The scheduler is a pure function of the population size
//! and the shared generator; no scheduler state persists between ticks.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Returns a uniform random permutation of `0..agent_count`.
pub fn activation_order(agent_count: usize, rng: &mut SmallRng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..agent_count).collect();
    order.shuffle(rng);
    order
}
