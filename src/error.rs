//! Crate-wide error type.
//!
//! The system has exactly two failure modes; every other operation is
//! total. Lookups that miss (an absent player, an owner nobody knows)
//! are ordinary `Option`/fall-through cases, not errors.

use thiserror::Error;

use crate::properties::MAX_HOUSES;

/// Errors from property creation and rent assessment.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The property factory received a tag it does not recognize.
    /// Creation aborts; there is no fallback kind.
    #[error("unknown property kind `{0}`")]
    UnknownPropertyKind(String),

    /// A house count past the end of the rent table.
    #[error("house count {0} is outside the rent table (max {MAX_HOUSES})")]
    HouseCountOutOfRange(u8),
}

/// Convenience alias for crate results.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::UnknownPropertyKind("casino".to_string());
        assert_eq!(err.to_string(), "unknown property kind `casino`");

        let err = Error::HouseCountOutOfRange(7);
        assert_eq!(
            err.to_string(),
            "house count 7 is outside the rent table (max 5)"
        );
    }
}
