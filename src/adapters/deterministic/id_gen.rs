//! Counting ID generator producing a predictable sequence.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ports::IdGenerator;

/// ID generator that yields `p-0001`, `p-0002`, ... in order.
pub struct SequenceIdGenerator {
    counter: AtomicUsize,
}

impl SequenceIdGenerator {
    /// Creates a generator starting at `p-0001`.
    #[must_use]
    pub fn new() -> Self {
        Self { counter: AtomicUsize::new(0) }
    }
}

impl Default for SequenceIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn generate_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("p-{n:04}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_count_up_from_one() {
        let gen = SequenceIdGenerator::new();
        assert_eq!(gen.generate_id(), "p-0001");
        assert_eq!(gen.generate_id(), "p-0002");
        assert_eq!(gen.generate_id(), "p-0003");
    }
}
