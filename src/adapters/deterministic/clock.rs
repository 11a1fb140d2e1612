//! Fixed clock returning a preset instant.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Clock that always returns the same instant.
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock pinned to the given instant.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self { now: DateTime::UNIX_EPOCH }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_returns_the_pinned_instant() {
        let instant = "2024-12-24T18:00:00Z".parse().unwrap();
        let clock = FixedClock::new(instant);

        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), instant);
    }
}
