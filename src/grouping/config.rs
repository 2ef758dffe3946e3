//! Grouping run configuration.
//!
//! Bundles the strategy, target group size and optional seed so a caller
//! can switch behaviour through configuration instead of code.
//!
//! # Usage
//!
//! ```
//! use u_group::grouping::{GroupingConfig, GroupingStrategy};
//!
//! let config: GroupingConfig =
//!     serde_json::from_str(r#"{"strategy": "chunked", "group_size": 4}"#).unwrap();
//! assert_eq!(config.strategy, GroupingStrategy::Chunked);
//! assert_eq!(config.seed, None);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::GroupingStrategy;
use crate::error::PartitionError;
use crate::models::{Participant, Partition};
use crate::validation::check_group_size;

/// Default target group size.
pub const DEFAULT_GROUP_SIZE: usize = 3;

/// Configuration for a grouping run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    /// Partitioning strategy.
    pub strategy: GroupingStrategy,
    /// Target number of members per group.
    pub group_size: usize,
    /// Fixed RNG seed. `None` = fresh entropy on every run.
    pub seed: Option<u64>,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            strategy: GroupingStrategy::default(),
            group_size: DEFAULT_GROUP_SIZE,
            seed: None,
        }
    }
}

impl GroupingConfig {
    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: GroupingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the target group size.
    pub fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }

    /// Fixes the RNG seed, making runs reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the group size against the strategy's minimum.
    pub fn validate(&self) -> Result<(), PartitionError> {
        check_group_size(self.group_size, self.strategy.min_group_size())
    }

    /// Partitions `roster`, seeding from `seed` or from thread-local entropy.
    pub fn partition(&self, roster: &[Participant]) -> Result<Partition, PartitionError> {
        match self.seed {
            Some(seed) => self.partition_with(roster, &mut StdRng::seed_from_u64(seed)),
            None => self.partition_with(roster, &mut rand::rng()),
        }
    }

    /// Partitions `roster` with a caller-supplied RNG, ignoring `seed`.
    pub fn partition_with<R: Rng + ?Sized>(
        &self,
        roster: &[Participant],
        rng: &mut R,
    ) -> Result<Partition, PartitionError> {
        self.strategy.partition(roster, self.group_size, rng)
    }
}
