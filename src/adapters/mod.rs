//! Adapter implementations of the port traits.
//!
//! `live` adapters touch the real world (disk, system clock, thread RNG,
//! the Resend API). `deterministic` adapters are fully predictable and
//! back the test wiring in [`crate::context::ServiceContext::deterministic`].

pub mod deterministic;
pub mod live;
