//! Interleaved-category partitioning.
//!
//! # Algorithm
//!
//! 1. Shuffle the roster.
//! 2. Bucket participants by category (buckets in order of first
//!    appearance, each a stack in shuffled order).
//! 3. While every bucket still has an unplaced member:
//!    a. pop one member from each bucket into a new group,
//!    b. fill the group up to the target size from the tail of the
//!       shuffled pool.
//! 4. Unplaced participants, in shuffled order, form one final group.
//!
//! Seeding stops the moment any one category is exhausted; remaining
//! members of other categories are only used as pool fill or end up in
//! the final group, which may be single-category or off-size.
//!
//! # Complexity
//! O(n) after the shuffle. Placed participants are tracked by index, and
//! buckets and the pool skip placed entries lazily instead of being
//! filtered by name.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::error::PartitionError;
use crate::models::{Group, Participant, Partition};
use crate::validation::{check_group_size, check_roster};

/// Smallest group size the interleaved strategy accepts.
///
/// Category mixing needs at least a pair.
pub const INTERLEAVED_MIN_GROUP_SIZE: usize = 2;

/// Partitions `roster` with round-robin category seeding.
///
/// # Errors
/// - [`PartitionError::InvalidGroupSize`] if `group_size < 2`
/// - [`PartitionError::EmptyRoster`], [`PartitionError::DuplicateName`] or
///   [`PartitionError::EmptyName`] for a malformed roster
///
/// Validation runs before the shuffle, so a rejected call leaves `rng`
/// untouched.
pub fn partition_interleaved<R: Rng + ?Sized>(
    roster: &[Participant],
    group_size: usize,
    rng: &mut R,
) -> Result<Partition, PartitionError> {
    check_group_size(group_size, INTERLEAVED_MIN_GROUP_SIZE)?;
    check_roster(roster)?;

    let mut shuffled = roster.to_vec();
    shuffled.shuffle(rng);
    let partition = interleave_shuffled(shuffled, group_size);

    debug!(
        strategy = "interleaved",
        participants = roster.len(),
        group_size,
        groups = partition.group_count(),
        "roster partitioned"
    );
    Ok(partition)
}

/// Groups an already-shuffled roster with round-robin category seeding.
///
/// Deterministic: the output depends only on the order of `shuffled`.
/// Preconditions (unique names, `group_size >= 2`) are the caller's
/// responsibility; an empty input yields an empty partition.
pub fn interleave_shuffled(shuffled: Vec<Participant>, group_size: usize) -> Partition {
    let mut buckets = CategoryBuckets::new(&shuffled);
    let mut pool = Pool::new(shuffled.len());
    let mut groups: Vec<Vec<usize>> = Vec::new();

    while buckets.all_live(&pool) {
        let mut group = Vec::with_capacity(group_size.max(buckets.len()));

        for bucket in 0..buckets.len() {
            if let Some(idx) = buckets.pop_live(bucket, &pool) {
                pool.place(idx);
                group.push(idx);
            }
        }

        while group.len() < group_size {
            match pool.pop_tail() {
                Some(idx) => group.push(idx),
                None => break,
            }
        }

        trace!(group = groups.len() + 1, size = group.len(), "seeded group");
        groups.push(group);
    }

    let leftover = pool.unplaced();
    if !leftover.is_empty() {
        trace!(size = leftover.len(), "leftover group");
        groups.push(leftover);
    }

    let mut slots: Vec<Option<Participant>> = shuffled.into_iter().map(Some).collect();
    groups
        .into_iter()
        .map(|indices| {
            indices
                .into_iter()
                .filter_map(|idx| slots[idx].take())
                .collect::<Group>()
        })
        .collect::<Vec<_>>()
        .into()
}

/// Unplaced participants, as indices into the shuffled roster.
///
/// Everything at or above `tail` is placed, so popping from the tail
/// walks down past entries already taken by category seeding.
struct Pool {
    placed: Vec<bool>,
    tail: usize,
}

impl Pool {
    fn new(len: usize) -> Self {
        Self {
            placed: vec![false; len],
            tail: len,
        }
    }

    fn is_placed(&self, idx: usize) -> bool {
        self.placed[idx]
    }

    fn place(&mut self, idx: usize) {
        self.placed[idx] = true;
    }

    /// Takes the last unplaced participant.
    fn pop_tail(&mut self) -> Option<usize> {
        while self.tail > 0 {
            self.tail -= 1;
            if !self.placed[self.tail] {
                self.placed[self.tail] = true;
                return Some(self.tail);
            }
        }
        None
    }

    /// Unplaced participants in shuffled order.
    fn unplaced(&self) -> Vec<usize> {
        (0..self.tail).filter(|&idx| !self.placed[idx]).collect()
    }
}

/// Per-category stacks of shuffled-roster indices.
///
/// Entries placed through pool fill stay in their stack until they reach
/// the top, where they are discarded.
struct CategoryBuckets {
    stacks: Vec<Vec<usize>>,
}

impl CategoryBuckets {
    fn new(shuffled: &[Participant]) -> Self {
        let mut slot_of: HashMap<&str, usize> = HashMap::new();
        let mut stacks: Vec<Vec<usize>> = Vec::new();

        for (idx, participant) in shuffled.iter().enumerate() {
            let slot = *slot_of
                .entry(participant.category.as_str())
                .or_insert_with(|| {
                    stacks.push(Vec::new());
                    stacks.len() - 1
                });
            stacks[slot].push(idx);
        }

        Self { stacks }
    }

    fn len(&self) -> usize {
        self.stacks.len()
    }

    fn prune(&mut self, bucket: usize, pool: &Pool) {
        let stack = &mut self.stacks[bucket];
        while stack.last().is_some_and(|&idx| pool.is_placed(idx)) {
            stack.pop();
        }
    }

    /// Whether there is at least one bucket and none is exhausted.
    fn all_live(&mut self, pool: &Pool) -> bool {
        if self.stacks.is_empty() {
            return false;
        }
        for bucket in 0..self.stacks.len() {
            self.prune(bucket, pool);
            if self.stacks[bucket].is_empty() {
                return false;
            }
        }
        true
    }

    /// Pops the most recently pushed unplaced member of `bucket`.
    fn pop_live(&mut self, bucket: usize, pool: &Pool) -> Option<usize> {
        self.prune(bucket, pool);
        self.stacks[bucket].pop()
    }
}
