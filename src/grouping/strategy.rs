//! Runtime-selectable partitioning strategy.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::chunked::{partition_chunked, CHUNKED_MIN_GROUP_SIZE};
use super::interleaved::{partition_interleaved, INTERLEAVED_MIN_GROUP_SIZE};
use crate::error::PartitionError;
use crate::models::{Participant, Partition};

/// Partitioning strategy.
///
/// # Example
///
/// ```
/// use u_group::grouping::GroupingStrategy;
///
/// assert_eq!(GroupingStrategy::default(), GroupingStrategy::Interleaved);
/// assert_eq!(GroupingStrategy::Chunked.min_group_size(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingStrategy {
    /// Round-robin category seeding with pool fill.
    #[default]
    Interleaved,
    /// Consecutive chunks with small-tail redistribution.
    Chunked,
}

impl GroupingStrategy {
    /// Strategy name as used in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Interleaved => "interleaved",
            Self::Chunked => "chunked",
        }
    }

    /// Smallest group size this strategy accepts.
    pub fn min_group_size(&self) -> usize {
        match self {
            Self::Interleaved => INTERLEAVED_MIN_GROUP_SIZE,
            Self::Chunked => CHUNKED_MIN_GROUP_SIZE,
        }
    }

    /// Partitions `roster` using this strategy.
    pub fn partition<R: Rng + ?Sized>(
        &self,
        roster: &[Participant],
        group_size: usize,
        rng: &mut R,
    ) -> Result<Partition, PartitionError> {
        match self {
            Self::Interleaved => partition_interleaved(roster, group_size, rng),
            Self::Chunked => partition_chunked(roster, group_size, rng),
        }
    }
}
