//! The draw core: constrained random assignment generation.
//!
//! Produces a gift-giving assignment over a set of participants as a
//! single n-cycle: a uniformly random permutation is interpreted as
//! "position i gives to position i+1 (mod n)". That construction makes
//! every candidate a bijection with no self-pairing for free; exclusion
//! rules are the only constraint left, and those are satisfied by
//! bounded retry. This is a Monte Carlo search, not a complete solver:
//! exclusion sets satisfiable only by disjoint smaller cycles are
//! reported as unsatisfiable.

use std::collections::{HashMap, HashSet};

use crate::model::{Assignment, Exclusion};
use crate::ports::rng::Rng;

/// Maximum number of random permutations tried before giving up.
pub const MAX_ATTEMPTS: usize = 100;

/// Smallest group a draw can run on. A 2-cycle would force a mutual
/// pairing, which the product treats as invalid.
pub const MIN_PARTICIPANTS: usize = 3;

/// Why a draw produced no assignment list.
///
/// Both variants are ordinary outcomes, not program errors: the caller
/// turns them into user-facing guidance (add people, relax exclusions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawFailure {
    /// Fewer than [`MIN_PARTICIPANTS`] identifiers were supplied; no
    /// search was attempted.
    GroupTooSmall {
        /// Number of participants actually supplied.
        count: usize,
    },
    /// No compliant permutation was found within [`MAX_ATTEMPTS`]
    /// attempts. The exclusion rules are too restrictive relative to
    /// the group size.
    Unsatisfiable,
}

impl std::fmt::Display for DrawFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GroupTooSmall { count } => write!(
                f,
                "at least {MIN_PARTICIPANTS} participants are required for a draw (got {count})"
            ),
            Self::Unsatisfiable => write!(
                f,
                "no valid assignment found within {MAX_ATTEMPTS} attempts; \
                 the exclusion rules may be too restrictive"
            ),
        }
    }
}

/// Generates a gift-giving assignment covering every participant
/// exactly once as giver and exactly once as receiver.
///
/// `participant_ids` must be unique (the caller's responsibility) and
/// contain at least [`MIN_PARTICIPANTS`] entries. `exclusions` are
/// directional; entries referencing unknown identifiers simply never
/// match a candidate pair. The function is stateless and keeps no
/// randomness of its own; all randomness flows through `rng`.
///
/// # Errors
///
/// Returns [`DrawFailure::GroupTooSmall`] for undersized input and
/// [`DrawFailure::Unsatisfiable`] when the attempt budget runs out.
pub fn generate_assignments(
    rng: &dyn Rng,
    participant_ids: &[String],
    exclusions: &[Exclusion],
) -> Result<Vec<Assignment>, DrawFailure> {
    if participant_ids.len() < MIN_PARTICIPANTS {
        return Err(DrawFailure::GroupTooSmall { count: participant_ids.len() });
    }

    // Exclusions are invariant across attempts; build the lookup once.
    let excluded = exclusion_lookup(exclusions);

    for _ in 0..MAX_ATTEMPTS {
        let order = shuffled(rng, participant_ids);
        if let Some(assignments) = cycle_if_valid(&order, &excluded) {
            return Ok(assignments);
        }
    }

    Err(DrawFailure::Unsatisfiable)
}

/// Returns a new vector with the items in uniformly random order.
///
/// Fisher–Yates, driven entirely by the injected random source so a
/// seeded `rng` yields a reproducible order.
#[must_use]
pub fn shuffled(rng: &dyn Rng, items: &[String]) -> Vec<String> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.next_index(i + 1);
        out.swap(i, j);
    }
    out
}

/// Maps each excluder to the set of receivers it must not draw.
fn exclusion_lookup(exclusions: &[Exclusion]) -> HashMap<&str, HashSet<&str>> {
    let mut lookup: HashMap<&str, HashSet<&str>> = HashMap::new();
    for exclusion in exclusions {
        lookup
            .entry(exclusion.excluder_id.as_str())
            .or_default()
            .insert(exclusion.excluded_id.as_str());
    }
    lookup
}

/// Interprets `order` as the cyclic successor mapping and returns the
/// assignment list, or `None` as soon as any pair hits an exclusion.
fn cycle_if_valid(
    order: &[String],
    excluded: &HashMap<&str, HashSet<&str>>,
) -> Option<Vec<Assignment>> {
    let mut assignments = Vec::with_capacity(order.len());
    for (i, giver) in order.iter().enumerate() {
        let receiver = &order[(i + 1) % order.len()];
        if excluded.get(giver.as_str()).is_some_and(|set| set.contains(receiver.as_str())) {
            return None;
        }
        assignments.push(Assignment { giver_id: giver.clone(), receiver_id: receiver.clone() });
    }
    Some(assignments)
}
