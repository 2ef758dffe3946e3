//! Group model.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::Participant;

/// An ordered set of participants working together.
///
/// Member order is the order the partitioner placed them in; renderers
/// may rely on it being stable for a given partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group {
    members: Vec<Participant>,
}

impl Group {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty group with room for `capacity` members.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
        }
    }

    /// Appends a member.
    pub fn push(&mut self, participant: Participant) {
        self.members.push(participant);
    }

    /// Members in placement order.
    pub fn members(&self) -> &[Participant] {
        &self.members
    }

    /// Member names in placement order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|p| p.name.as_str())
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether a participant with `name` is in this group.
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|p| p.name == name)
    }

    /// Number of distinct categories among the members.
    pub fn category_count(&self) -> usize {
        self.members
            .iter()
            .map(|p| p.category.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Whether members come from more than one category.
    pub fn is_mixed(&self) -> bool {
        self.category_count() > 1
    }

    /// Consumes the group, returning its members.
    pub fn into_members(self) -> Vec<Participant> {
        self.members
    }
}

impl From<Vec<Participant>> for Group {
    fn from(members: Vec<Participant>) -> Self {
        Self { members }
    }
}

impl FromIterator<Participant> for Group {
    fn from_iter<T: IntoIterator<Item = Participant>>(iter: T) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_group() -> Group {
        vec![
            Participant::new("A", "X"),
            Participant::new("B", "Y"),
            Participant::new("C", "X"),
        ]
        .into()
    }

    #[test]
    fn test_group_queries() {
        let group = sample_group();
        assert_eq!(group.len(), 3);
        assert!(group.contains("B"));
        assert!(!group.contains("D"));
        assert_eq!(group.names().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_group_categories() {
        let group = sample_group();
        assert_eq!(group.category_count(), 2);
        assert!(group.is_mixed());

        let single: Group = vec![Participant::new("A", "X")].into();
        assert!(!single.is_mixed());
        assert!(!Group::new().is_mixed());
    }

    #[test]
    fn test_group_display() {
        assert_eq!(sample_group().to_string(), "A, B, C");
        assert_eq!(Group::new().to_string(), "");
    }
}
