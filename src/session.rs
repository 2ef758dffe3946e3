//! Per-session grouping state.
//!
//! A display layer that redraws the same groups many times keeps the last
//! partition here instead of recomputing it. The retained partition is
//! dropped whenever the roster or any grouping setting changes, and is
//! only replaced by a successful run.

use rand::Rng;
use tracing::debug;

use crate::error::PartitionError;
use crate::grouping::{GroupingConfig, GroupingStrategy};
use crate::models::{Partition, Roster};

/// Roster, settings and last partition for one user session.
///
/// # Example
///
/// ```
/// use u_group::grouping::GroupingConfig;
/// use u_group::models::Roster;
/// use u_group::session::GroupingSession;
///
/// let roster = Roster::from_pairs([("A", "X"), ("B", "Y"), ("C", "X"), ("D", "Y")]);
/// let mut session = GroupingSession::new(roster, GroupingConfig::default().with_group_size(2));
///
/// session.regroup().unwrap();
/// assert!(session.current().is_some());
///
/// session.set_group_size(4);
/// assert!(session.current().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GroupingSession {
    roster: Roster,
    config: GroupingConfig,
    current: Option<Partition>,
}

impl GroupingSession {
    /// Creates a session with no partition yet.
    pub fn new(roster: Roster, config: GroupingConfig) -> Self {
        Self {
            roster,
            config,
            current: None,
        }
    }

    /// The roster that will be grouped.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Current settings.
    pub fn config(&self) -> &GroupingConfig {
        &self.config
    }

    /// The last successfully computed partition, if still valid.
    pub fn current(&self) -> Option<&Partition> {
        self.current.as_ref()
    }

    /// Replaces the roster. Drops the retained partition if it differs.
    pub fn set_roster(&mut self, roster: Roster) {
        if self.roster != roster {
            self.roster = roster;
            self.invalidate();
        }
    }

    /// Changes the target group size. Drops the retained partition if it differs.
    pub fn set_group_size(&mut self, group_size: usize) {
        if self.config.group_size != group_size {
            self.config.group_size = group_size;
            self.invalidate();
        }
    }

    /// Changes the strategy. Drops the retained partition if it differs.
    pub fn set_strategy(&mut self, strategy: GroupingStrategy) {
        if self.config.strategy != strategy {
            self.config.strategy = strategy;
            self.invalidate();
        }
    }

    /// Drops the retained partition.
    pub fn invalidate(&mut self) {
        if self.current.take().is_some() {
            debug!("retained partition invalidated");
        }
    }

    /// Computes a new partition using the configured seed or fresh entropy.
    ///
    /// On error the previously retained partition is left as it was.
    pub fn regroup(&mut self) -> Result<&Partition, PartitionError> {
        let partition = self.config.partition(self.roster.participants())?;
        Ok(&*self.current.insert(partition))
    }

    /// Computes a new partition with a caller-supplied RNG.
    ///
    /// On error the previously retained partition is left as it was.
    pub fn regroup_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&Partition, PartitionError> {
        let partition = self.config.partition_with(self.roster.participants(), rng)?;
        Ok(&*self.current.insert(partition))
    }
}
