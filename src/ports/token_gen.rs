//! Token generator port for shareable team join tokens.

/// Generates short join tokens that organizers share with their group.
///
/// Tokens are human-transcribable, so the live alphabet omits easily
/// confused characters (no `I`, `O`, `0`, `1`).
pub trait TokenGenerator: Send + Sync {
    /// Generates a new join token.
    fn generate_token(&self) -> String;
}
