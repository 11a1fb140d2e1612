//! ID generator port for producing participant identifiers.

/// Generates unique participant identifiers.
///
/// Abstracting ID generation lets tests substitute a predictable
/// sequence so stored documents compare equal across runs.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
