//! Category-aware group partitioning.
//!
//! Splits a roster of participants, each tagged with a category label,
//! into groups of a target size while spreading categories across groups.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Participant`, `Roster`, `Group`, `Partition`
//! - **`validation`**: Precondition checks (empty roster, duplicate names, group size)
//! - **`grouping`**: Partitioning strategies (interleaved, chunked), configuration
//!   and partition metrics
//! - **`session`**: Per-session retention of the last computed partition
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use u_group::grouping::partition_chunked;
//! use u_group::models::Roster;
//!
//! let roster = Roster::from_pairs([("Ada", "1st"), ("Bo", "3rd"), ("Cy", "1st"), ("Di", "3rd")]);
//! let mut rng = StdRng::seed_from_u64(7);
//! let partition = partition_chunked(roster.participants(), 2, &mut rng).unwrap();
//! assert_eq!(partition.group_count(), 2);
//! ```
//!
//! # Randomness
//!
//! Every strategy shuffles the roster once and is otherwise a deterministic
//! function of the shuffled order. The random source is always injected, so a
//! seeded generator reproduces the same partition.

pub mod error;
pub mod grouping;
pub mod models;
pub mod session;
pub mod validation;

pub use error::PartitionError;
