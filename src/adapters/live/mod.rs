//! Live adapters backed by real system resources.

pub mod clock;
pub mod filesystem;
pub mod id_gen;
pub mod mailer;
pub mod rng;
pub mod token_gen;

pub use clock::LiveClock;
pub use filesystem::LiveFileSystem;
pub use id_gen::LiveIdGenerator;
pub use mailer::ResendMailer;
pub use rng::LiveRng;
pub use token_gen::LiveTokenGenerator;
