//! Live randomness adapter using the thread-local generator.

use rand::Rng as _;

use crate::ports::rng::Rng;

/// Live random source backed by `rand::thread_rng`.
pub struct LiveRng;

impl Rng for LiveRng {
    fn next_index(&self, bound: usize) -> usize {
        rand::thread_rng().gen_range(0..bound)
    }
}
