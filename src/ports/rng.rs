//! Randomness port for the draw shuffle.

/// Supplies uniformly distributed random indices.
///
/// The assignment generator depends on this trait instead of a concrete
/// random number generator so that tests can inject a seeded source and
/// make every draw reproducible.
pub trait Rng: Send + Sync {
    /// Returns a uniformly distributed index in `0..bound`.
    ///
    /// `bound` must be at least 1; implementations may panic on 0.
    fn next_index(&self, bound: usize) -> usize;
}
