//! Error type shared by every module of the crate.
//!
//! Only malformed external data is an error. An unreachable target is an
//! ordinary empty result.

use thiserror::Error;

/// Failures raised while building the breeding data or starting a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreedError {
    /// A species name that is not part of the breeding table.
    #[error("unknown species: {0}")]
    UnknownSpecies(String),

    /// The same species was registered twice.
    #[error("duplicate species: {0}")]
    DuplicateSpecies(String),

    /// A pair of species has no recorded offspring.
    #[error("no offspring recorded for {first} + {second}")]
    IncompleteTable { first: String, second: String },

    /// A matrix entry differs from its mirrored entry.
    #[error("breeding table is not symmetric for {first} + {second}")]
    AsymmetricTable { first: String, second: String },

    /// A matrix whose shape does not match its species list.
    #[error("malformed breeding matrix: {0}")]
    MalformedMatrix(String),

    /// Single-parent search requires a breeding graph.
    #[error("single-parent search requires a breeding graph")]
    MissingGraph,

    /// A configuration rejected by its `validate` method.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Breeding data that could not be parsed.
    #[cfg(feature = "serde")]
    #[error("invalid breeding data: {0}")]
    Data(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, BreedError>;

#[cfg(feature = "serde")]
impl From<serde_json::Error> for BreedError {
    fn from(err: serde_json::Error) -> Self {
        BreedError::Data(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_species_names_the_species() {
        let err = BreedError::UnknownSpecies("Lamball".into());
        assert_eq!(err.to_string(), "unknown species: Lamball");
    }

    #[test]
    fn test_incomplete_table_names_both_sources() {
        let err = BreedError::IncompleteTable {
            first: "A".into(),
            second: "B".into(),
        };
        assert!(err.to_string().contains("A + B"));
    }
}
