//! Chunked partitioning with tail rebalancing.
//!
//! # Algorithm
//!
//! 1. Shuffle the roster.
//! 2. Slice it into consecutive chunks of the target size; the last chunk
//!    may be shorter.
//! 3. If there are at least two chunks and the last one has fewer than
//!    `group_size / 2` members (floor), disband it and deal its members
//!    round-robin onto the other chunks, starting with the first.
//!
//! After rebalancing no group exceeds `group_size + group_size / 2 - 1`
//! members.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::PartitionError;
use crate::models::{Group, Participant, Partition};
use crate::validation::{check_group_size, check_roster};

/// Smallest group size the chunked strategy accepts.
pub const CHUNKED_MIN_GROUP_SIZE: usize = 1;

/// Partitions `roster` into shuffled chunks of `group_size`.
///
/// # Errors
/// - [`PartitionError::InvalidGroupSize`] if `group_size < 1`
/// - [`PartitionError::EmptyRoster`], [`PartitionError::DuplicateName`] or
///   [`PartitionError::EmptyName`] for a malformed roster
pub fn partition_chunked<R: Rng + ?Sized>(
    roster: &[Participant],
    group_size: usize,
    rng: &mut R,
) -> Result<Partition, PartitionError> {
    check_group_size(group_size, CHUNKED_MIN_GROUP_SIZE)?;
    check_roster(roster)?;

    let mut shuffled = roster.to_vec();
    shuffled.shuffle(rng);
    let partition = chunk_shuffled(shuffled, group_size);

    debug!(
        strategy = "chunked",
        participants = roster.len(),
        group_size,
        groups = partition.group_count(),
        "roster partitioned"
    );
    Ok(partition)
}

/// Slices an already-shuffled roster into chunks, rebalancing a small tail.
///
/// Deterministic: the output depends only on the order of `shuffled`.
/// A `group_size` of 0 is treated as 1.
pub fn chunk_shuffled(shuffled: Vec<Participant>, group_size: usize) -> Partition {
    let size = group_size.max(1);
    let mut chunks: Vec<Vec<Participant>> = Vec::with_capacity(shuffled.len().div_ceil(size));

    let mut members = shuffled.into_iter().peekable();
    while members.peek().is_some() {
        chunks.push(members.by_ref().take(size).collect());
    }

    let undersized_tail = chunks.len() >= 2 && chunks.last().is_some_and(|c| c.len() < size / 2);
    if undersized_tail {
        if let Some(leftover) = chunks.pop() {
            let remaining = chunks.len();
            debug!(leftover = leftover.len(), groups = remaining, "disbanding undersized tail");
            for (i, participant) in leftover.into_iter().enumerate() {
                chunks[i % remaining].push(participant);
            }
        }
    }

    chunks
        .into_iter()
        .map(Group::from)
        .collect::<Vec<_>>()
        .into()
}
