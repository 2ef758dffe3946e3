//! Partition quality metrics.
//!
//! Summarizes how evenly a partition splits its roster and how well it
//! mixes categories.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Group count | Number of groups |
//! | Min / max size | Smallest and largest group |
//! | Mixed groups | Groups with members from 2+ categories |
//! | Mixed rate | Mixed groups / group count |
//! | Categories | Distinct categories across all groups |

use std::collections::HashSet;

use crate::models::{Group, Partition};

/// Partition quality indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionSummary {
    /// Number of groups.
    pub group_count: usize,
    /// Number of placed participants.
    pub participant_count: usize,
    /// Smallest group size (0 for an empty partition).
    pub min_group_size: usize,
    /// Largest group size (0 for an empty partition).
    pub max_group_size: usize,
    /// Groups containing more than one category.
    pub mixed_group_count: usize,
    /// Distinct categories across the partition.
    pub category_count: usize,
    /// Fraction of mixed groups (0.0..1.0).
    pub mixed_rate: f64,
}

impl PartitionSummary {
    /// Computes metrics for a partition.
    pub fn calculate(partition: &Partition) -> Self {
        let sizes = partition.iter().map(Group::len);
        let min_group_size = sizes.clone().min().unwrap_or(0);
        let max_group_size = sizes.max().unwrap_or(0);

        let mixed_group_count = partition.iter().filter(|g| g.is_mixed()).count();
        let category_count = partition
            .iter()
            .flat_map(Group::members)
            .map(|p| p.category.as_str())
            .collect::<HashSet<_>>()
            .len();

        let group_count = partition.group_count();
        let mixed_rate = if group_count == 0 {
            0.0
        } else {
            mixed_group_count as f64 / group_count as f64
        };

        Self {
            group_count,
            participant_count: partition.participant_count(),
            min_group_size,
            max_group_size,
            mixed_group_count,
            category_count,
            mixed_rate,
        }
    }

    /// Whether no group is smaller than `group_size / 2`.
    ///
    /// A single group is always accepted, since a roster smaller than the
    /// target size cannot do better.
    pub fn meets_target(&self, group_size: usize) -> bool {
        self.group_count <= 1 || self.min_group_size >= group_size / 2
    }
}
