//! Input validation for grouping runs.
//!
//! Checks roster integrity and group size before any shuffling happens.
//! Detects:
//! - Empty rosters
//! - Duplicate participant names
//! - Empty participant names
//! - Group sizes below a strategy's minimum
//!
//! Names identify participants downstream (display lookups), so a
//! duplicate is rejected rather than grouped as two distinct people.

use std::collections::HashSet;

use tracing::debug;

use crate::error::PartitionError;
use crate::models::Participant;

/// Validation result listing every detected issue.
pub type ValidationResult = Result<(), Vec<PartitionError>>;

/// Validates a roster, collecting all issues.
///
/// Checks:
/// 1. At least one participant
/// 2. No empty names
/// 3. No duplicate names (each repeated name reported once)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(roster: &[Participant]) -> ValidationResult {
    let mut errors = Vec::new();

    if roster.is_empty() {
        errors.push(PartitionError::EmptyRoster);
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for (position, participant) in roster.iter().enumerate() {
        let name = participant.name.as_str();
        if name.is_empty() {
            errors.push(PartitionError::EmptyName { position });
            continue;
        }
        if !seen.insert(name) && reported.insert(name) {
            errors.push(PartitionError::DuplicateName {
                name: name.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a roster, returning the first issue found.
pub fn check_roster(roster: &[Participant]) -> Result<(), PartitionError> {
    validate_roster(roster).map_err(|mut errors| {
        debug!(count = errors.len(), "roster rejected");
        errors.swap_remove(0)
    })
}

/// Checks `size` against a strategy's minimum group size.
pub fn check_group_size(size: usize, min: usize) -> Result<(), PartitionError> {
    if size < min {
        debug!(size, min, "group size rejected");
        return Err(PartitionError::InvalidGroupSize { size, min });
    }
    Ok(())
}
