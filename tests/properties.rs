//! Property-based tests for the partitioning strategies.
//!
//! Rosters are generated with unique names and a small category
//! alphabet so that both mixed and single-category inputs show up.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_group::grouping::{
    chunk_shuffled, interleave_shuffled, partition_chunked, partition_interleaved,
    GroupingStrategy,
};
use u_group::models::{Participant, Partition, Roster};

fn roster_strategy() -> impl Strategy<Value = Roster> {
    prop::collection::vec(0u8..4, 1..60).prop_map(|categories| {
        categories
            .into_iter()
            .enumerate()
            .map(|(i, c)| Participant::new(format!("P{i}"), format!("C{c}")))
            .collect::<Roster>()
    })
}

fn sorted_names(partition: &Partition) -> Vec<String> {
    let mut names: Vec<String> = partition.names().map(str::to_string).collect();
    names.sort();
    names
}

fn sorted_roster_names(roster: &Roster) -> Vec<String> {
    let mut names: Vec<String> = roster.participants().iter().map(|p| p.name.clone()).collect();
    names.sort();
    names
}

// =============================================================================
// Bijection
// =============================================================================

proptest! {
    /// Every participant lands in exactly one group (interleaved).
    #[test]
    fn prop_interleaved_bijection(roster in roster_strategy(), size in 2usize..8, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let partition = partition_interleaved(roster.participants(), size, &mut rng).unwrap();
        prop_assert_eq!(sorted_names(&partition), sorted_roster_names(&roster));
        prop_assert!(partition.iter().all(|g| !g.is_empty()));
    }

    /// Every participant lands in exactly one group (chunked).
    #[test]
    fn prop_chunked_bijection(roster in roster_strategy(), size in 1usize..8, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let partition = partition_chunked(roster.participants(), size, &mut rng).unwrap();
        prop_assert_eq!(sorted_names(&partition), sorted_roster_names(&roster));
        prop_assert!(partition.iter().all(|g| !g.is_empty()));
    }
}

// =============================================================================
// Chunked size bounds
// =============================================================================

proptest! {
    /// No group grows past size + size/2 - 1 after redistribution.
    #[test]
    fn prop_chunked_upper_bound(count in 1usize..80, size in 1usize..10) {
        let roster: Vec<Participant> =
            (0..count).map(|i| Participant::new(i.to_string(), "X")).collect();
        let partition = chunk_shuffled(roster, size);
        let bound = (size + size / 2).saturating_sub(1).max(size);
        prop_assert!(partition.iter().all(|g| g.len() <= bound));
    }

    /// With two or more groups, none is below size/2.
    #[test]
    fn prop_chunked_no_tiny_tail(count in 1usize..80, size in 1usize..10) {
        let roster: Vec<Participant> =
            (0..count).map(|i| Participant::new(i.to_string(), "X")).collect();
        let partition = chunk_shuffled(roster, size);
        if partition.group_count() >= 2 {
            prop_assert!(partition.iter().all(|g| g.len() >= size / 2));
        }
        // Only the last group may fall short of the target.
        let groups = partition.groups();
        prop_assert!(groups[..groups.len() - 1].iter().all(|g| g.len() >= size));
    }
}

// =============================================================================
// Determinism
// =============================================================================

proptest! {
    /// Same roster, size and seed give the same partition.
    #[test]
    fn prop_seed_determinism(roster in roster_strategy(), size in 2usize..6, seed in any::<u64>()) {
        for strategy in [GroupingStrategy::Interleaved, GroupingStrategy::Chunked] {
            let a = strategy
                .partition(roster.participants(), size, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            let b = strategy
                .partition(roster.participants(), size, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            prop_assert_eq!(a, b);
        }
    }
}

// =============================================================================
// Interleaved category seeding
// =============================================================================

proptest! {
    /// With 2+ categories, every group before the final one is mixed.
    #[test]
    fn prop_interleaved_seeded_groups_mixed(roster in roster_strategy(), size in 2usize..6) {
        let categories = roster.categories().len();
        let partition = interleave_shuffled(roster.into_participants(), size);
        if categories >= 2 {
            let groups = partition.groups();
            prop_assert!(groups[..groups.len() - 1].iter().all(|g| g.is_mixed()));
        }
    }

    /// No participant is placed twice.
    #[test]
    fn prop_interleaved_no_duplicates(roster in roster_strategy(), size in 2usize..6) {
        let count = roster.len();
        let partition = interleave_shuffled(roster.into_participants(), size);
        let unique: HashSet<&str> = partition.names().collect();
        prop_assert_eq!(unique.len(), count);
        prop_assert_eq!(partition.participant_count(), count);
    }
}
