//! Error types for the checked load/store variants.
//!
//! Shape and width mismatches in the vector layer are compile-time errors
//! by design; the only runtime error path is the checked slice constructors
//! offered for tests and safety-conscious callers. Hot paths use the
//! unchecked raw-pointer contract and never allocate an error.

use thiserror::Error;

/// Result type used by the checked constructors.
pub type Result<T> = std::result::Result<T, LaneVecError>;

/// Errors from checked slice-based loads and stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaneVecError {
    /// The source slice holds fewer elements than the vector's lane count.
    #[error("source slice too short: need {needed} elements, got {got}")]
    SourceTooShort { needed: usize, got: usize },

    /// The destination slice holds fewer elements than the vector's lane count.
    #[error("destination slice too short: need {needed} elements, got {got}")]
    DestinationTooShort { needed: usize, got: usize },
}
