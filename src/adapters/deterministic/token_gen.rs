//! Scripted token generator replaying a fixed sequence.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::ports::TokenGenerator;

/// Token generator that hands out a preset sequence of tokens.
///
/// Lets tests script collisions with already-stored teams and assert the
/// create flow retries until it finds a free token.
pub struct ScriptedTokenGenerator {
    tokens: Mutex<VecDeque<String>>,
}

impl ScriptedTokenGenerator {
    /// Creates a generator that yields the given tokens in order.
    #[must_use]
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { tokens: Mutex::new(tokens.into_iter().map(Into::into).collect()) }
    }
}

impl TokenGenerator for ScriptedTokenGenerator {
    fn generate_token(&self) -> String {
        self.tokens
            .lock()
            .unwrap()
            .pop_front()
            .expect("ScriptedTokenGenerator ran out of scripted tokens")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_tokens_in_order() {
        let gen = ScriptedTokenGenerator::new(["AAAA", "BBBB"]);
        assert_eq!(gen.generate_token(), "AAAA");
        assert_eq!(gen.generate_token(), "BBBB");
    }

    #[test]
    #[should_panic(expected = "ran out of scripted tokens")]
    fn panics_when_exhausted() {
        let gen = ScriptedTokenGenerator::new(["AAAA"]);
        let _ = gen.generate_token();
        let _ = gen.generate_token();
    }
}
