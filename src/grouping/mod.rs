//! Group partitioning strategies.
//!
//! Both strategies shuffle the roster once and then group it
//! deterministically, so the shuffle is the only source of randomness.
//!
//! # Strategies
//!
//! - **Interleaved**: seeds each group with one member per category
//!   (round-robin), fills the rest from the shuffled pool, and stops seeding
//!   as soon as any category runs out. Whatever is left forms a final group.
//! - **Chunked**: slices the shuffled roster into consecutive groups of the
//!   target size and folds a too-small tail back into the other groups.
//!
//! # Submodules
//!
//! - [`config`]: Serializable run configuration
//! - [`summary`]: Partition quality metrics
//!
//! # Usage
//!
//! ```
//! use u_group::grouping::{GroupingConfig, GroupingStrategy};
//! use u_group::models::Roster;
//!
//! let roster = Roster::from_pairs([("A", "X"), ("B", "X"), ("C", "Y"), ("D", "Y")]);
//! let config = GroupingConfig::default()
//!     .with_strategy(GroupingStrategy::Interleaved)
//!     .with_group_size(2)
//!     .with_seed(42);
//!
//! let partition = config.partition(roster.participants()).unwrap();
//! assert_eq!(partition.participant_count(), 4);
//! ```

mod chunked;
pub mod config;
mod interleaved;
mod strategy;
pub mod summary;

pub use chunked::{chunk_shuffled, partition_chunked, CHUNKED_MIN_GROUP_SIZE};
pub use config::GroupingConfig;
pub use interleaved::{interleave_shuffled, partition_interleaved, INTERLEAVED_MIN_GROUP_SIZE};
pub use strategy::GroupingStrategy;
pub use summary::PartitionSummary;
