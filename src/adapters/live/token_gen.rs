//! Live adapter for the `TokenGenerator` port.

use rand::Rng as _;

use crate::ports::TokenGenerator;

/// Token alphabet with easily confused characters removed.
const TOKEN_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Number of characters in a join token.
const TOKEN_LENGTH: usize = 10;

/// Live token generator producing random 10-character join tokens.
pub struct LiveTokenGenerator;

impl TokenGenerator for LiveTokenGenerator {
    fn generate_token(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..TOKEN_LENGTH)
            .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_have_expected_length_and_alphabet() {
        let gen = LiveTokenGenerator;
        let token = gen.generate_token();

        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.bytes().all(|b| TOKEN_ALPHABET.contains(&b)));
    }

    #[test]
    fn tokens_are_not_repeated() {
        let gen = LiveTokenGenerator;
        // Collisions are possible in principle but vanishingly unlikely
        // across a 32^10 space.
        assert_ne!(gen.generate_token(), gen.generate_token());
    }
}
