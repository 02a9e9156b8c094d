//! Error types for the engine's construction boundary.

use thiserror::Error;

/// Errors surfaced by the engine's public constructors.
///
/// Everything past construction is either infallible or a programming-contract
/// violation (which panics rather than returning an error, since a truncated
/// enumeration has no meaningful result).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Root construction was asked for a zero-dimension problem.
    #[error("problem size must be positive")]
    InvalidSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_size_message() {
        assert_eq!(
            EngineError::InvalidSize.to_string(),
            "problem size must be positive"
        );
    }
}
