//! Service context bundling all port trait objects.

use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;
use crate::ports::id_gen::IdGenerator;
use crate::ports::mailer::Mailer;
use crate::ports::rng::Rng;
use crate::ports::token_gen::TokenGenerator;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live, deterministic).
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Filesystem for team document I/O.
    pub fs: Box<dyn FileSystem>,
    /// Random source for the draw shuffle.
    pub rng: Box<dyn Rng>,
    /// ID generator for participant identifiers.
    pub id_gen: Box<dyn IdGenerator>,
    /// Token generator for shareable join tokens.
    pub token_gen: Box<dyn TokenGenerator>,
    /// Mailer for participant notifications.
    pub mailer: Box<dyn Mailer>,
}

impl ServiceContext {
    /// Creates a live context with real adapters for every port.
    ///
    /// The mailer only needs `RESEND_API_KEY` once a send actually
    /// happens, so wiring it here is safe for commands that never mail.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::{
            LiveClock, LiveFileSystem, LiveIdGenerator, LiveRng, LiveTokenGenerator, ResendMailer,
        };

        Self {
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
            rng: Box::new(LiveRng),
            id_gen: Box::new(LiveIdGenerator),
            token_gen: Box::new(LiveTokenGenerator),
            mailer: Box::new(ResendMailer::new()),
        }
    }

    /// Creates a fully deterministic context for tests.
    ///
    /// The clock is pinned, the filesystem is in-memory, participant IDs
    /// count up from `p-0001`, the random source is seeded with `seed`,
    /// and the mailer captures instead of sending. The token generator
    /// starts with an empty script; tests that create teams replace it
    /// with their own scripted sequence.
    #[must_use]
    pub fn deterministic(seed: u64) -> Self {
        use crate::adapters::deterministic::{
            CapturingMailer, FixedClock, MemFileSystem, ScriptedTokenGenerator, SeededRng,
            SequenceIdGenerator,
        };

        Self {
            clock: Box::new(FixedClock::default()),
            fs: Box::new(MemFileSystem::new()),
            rng: Box::new(SeededRng::new(seed)),
            id_gen: Box::new(SequenceIdGenerator::new()),
            token_gen: Box::new(ScriptedTokenGenerator::new(Vec::<String>::new())),
            mailer: Box::new(CapturingMailer::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::deterministic::ScriptedTokenGenerator;

    #[test]
    fn deterministic_context_is_reproducible() {
        let a = ServiceContext::deterministic(7);
        let b = ServiceContext::deterministic(7);

        assert_eq!(a.clock.now(), b.clock.now());
        assert_eq!(a.rng.next_index(100), b.rng.next_index(100));
        assert_eq!(a.id_gen.generate_id(), b.id_gen.generate_id());
    }

    #[test]
    fn token_generator_can_be_replaced() {
        let mut ctx = ServiceContext::deterministic(0);
        ctx.token_gen = Box::new(ScriptedTokenGenerator::new(["FESTIVE123"]));

        assert_eq!(ctx.token_gen.generate_token(), "FESTIVE123");
    }
}
