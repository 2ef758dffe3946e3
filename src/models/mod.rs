//! Grouping domain models.
//!
//! Provides the data types for describing who is being grouped and the
//! groups that come out. Category labels are opaque strings; the models
//! only compare them for equality.
//!
//! # Domain Mappings
//!
//! | u-group | Classroom | Workshop | Sports |
//! |---------|-----------|----------|--------|
//! | Participant | Student | Attendee | Player |
//! | Category | Semester | Department | Skill tier |
//! | Group | Study group | Breakout table | Team |
//! | Partition | Group plan | Seating plan | Team sheet |

mod group;
mod participant;
mod partition;

pub use group::Group;
pub use participant::{Participant, Roster};
pub use partition::Partition;
