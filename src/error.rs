//! Error types for partitioning.

use thiserror::Error;

/// Why a partition could not be produced.
///
/// A failed call yields no partition and consumes no randomness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// Group size is below the strategy's minimum.
    #[error("group size {size} is below the minimum of {min}")]
    InvalidGroupSize {
        /// Requested group size.
        size: usize,
        /// Smallest size the strategy accepts.
        min: usize,
    },

    /// No participants to group.
    #[error("roster is empty")]
    EmptyRoster,

    /// Two participants share a name.
    #[error("duplicate participant name: {name}")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },

    /// A participant has an empty name.
    #[error("participant at position {position} has an empty name")]
    EmptyName {
        /// 0-based roster position.
        position: usize,
    },
}
