//! Deterministic adapters for tests and reproducible runs.
//!
//! These replace every live adapter with a fully predictable stand-in:
//! a seeded random source, a fixed clock, counting ID sequences, an
//! in-memory filesystem, and a mailer that captures instead of sending.

pub mod clock;
pub mod filesystem;
pub mod id_gen;
pub mod mailer;
pub mod rng;
pub mod token_gen;

pub use clock::FixedClock;
pub use filesystem::MemFileSystem;
pub use id_gen::SequenceIdGenerator;
pub use mailer::CapturingMailer;
pub use rng::SeededRng;
pub use token_gen::ScriptedTokenGenerator;
