//! Participant and roster models.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A person to be placed in a group.
///
/// `name` doubles as the participant's identity: display layers look up
/// supplementary data (portraits, notes) by it, so it must be unique
/// within one roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    /// Unique identifier and display name.
    pub name: String,
    /// Category label (e.g., "3rd semester").
    pub category: String,
}

impl Participant {
    /// Creates a participant.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }
}

impl<N: Into<String>, C: Into<String>> From<(N, C)> for Participant {
    fn from((name, category): (N, C)) -> Self {
        Self::new(name, category)
    }
}

/// The participants taking part in one grouping run.
///
/// Order is preserved but carries no meaning for the partitioners, which
/// shuffle before grouping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from `(name, category)` pairs.
    pub fn from_pairs<I, N, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        pairs.into_iter().map(Participant::from).collect()
    }

    /// Adds a participant.
    pub fn with_participant(mut self, participant: Participant) -> Self {
        self.participants.push(participant);
        self
    }

    /// Adds a participant in place.
    pub fn push(&mut self, participant: Participant) {
        self.participants.push(participant);
    }

    /// Keeps only the participants accepted by `is_present`.
    ///
    /// This is where an attendance filter applies before grouping.
    pub fn retain_present<F>(&mut self, mut is_present: F)
    where
        F: FnMut(&Participant) -> bool,
    {
        self.participants.retain(|p| is_present(p));
    }

    /// Participants in roster order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the roster has no participants.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.participants
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Looks up a participant by name.
    pub fn get(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    /// Consumes the roster, returning its participants.
    pub fn into_participants(self) -> Vec<Participant> {
        self.participants
    }
}

impl FromIterator<Participant> for Roster {
    fn from_iter<T: IntoIterator<Item = Participant>>(iter: T) -> Self {
        Self {
            participants: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Participant>> for Roster {
    fn from(participants: Vec<Participant>) -> Self {
        Self { participants }
    }
}
