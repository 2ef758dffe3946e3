//! Partition (result) model.
//!
//! A partition is the full output of one grouping run: every roster
//! participant appears in exactly one group.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Group;

/// An ordered sequence of groups covering a roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Partition {
    groups: Vec<Group>,
}

impl Partition {
    /// Creates an empty partition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a group.
    pub fn push(&mut self, group: Group) {
        self.groups.push(group);
    }

    /// Groups in order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Iterates over groups in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of placed participants.
    pub fn participant_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Whether the partition has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All participant names, group by group.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().flat_map(|g| g.names())
    }

    /// 1-based number of the group containing `name`.
    pub fn group_of(&self, name: &str) -> Option<usize> {
        self.groups
            .iter()
            .position(|g| g.contains(name))
            .map(|i| i + 1)
    }

    /// Consumes the partition, returning its groups.
    pub fn into_groups(self) -> Vec<Group> {
        self.groups
    }
}

impl From<Vec<Group>> for Partition {
    fn from(groups: Vec<Group>) -> Self {
        Self { groups }
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            writeln!(f, "Group {}: {}", i + 1, group)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Participant;

    fn sample_partition() -> Partition {
        vec![
            Group::from(vec![Participant::new("A", "X"), Participant::new("C", "Y")]),
            Group::from(vec![Participant::new("B", "X")]),
        ]
        .into()
    }

    #[test]
    fn test_partition_counts() {
        let partition = sample_partition();
        assert_eq!(partition.group_count(), 2);
        assert_eq!(partition.participant_count(), 3);
        assert_eq!(partition.names().collect::<Vec<_>>(), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_group_of() {
        let partition = sample_partition();
        assert_eq!(partition.group_of("C"), Some(1));
        assert_eq!(partition.group_of("B"), Some(2));
        assert_eq!(partition.group_of("Z"), None);
    }

    #[test]
    fn test_partition_display() {
        assert_eq!(
            sample_partition().to_string(),
            "Group 1: A, C\nGroup 2: B\n"
        );
        assert_eq!(Partition::new().to_string(), "");
    }

    #[test]
    fn test_partition_serde_shape() {
        let json = serde_json::to_value(sample_partition()).unwrap();
        assert_eq!(json[1][0]["name"], "B");
        let back: Partition = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample_partition());
    }
}
