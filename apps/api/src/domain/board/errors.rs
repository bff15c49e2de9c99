use thiserror::Error;

use super::value_objects::GroupId;
use crate::domain::member::MemberId;

/// Errors raised while building or checking a board
///
/// The drag and win operations themselves never fail; these only surface
/// when validating a roster, parsing external input, or auditing state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Member id cannot be empty")]
    EmptyMemberId,

    #[error("Member {0} has an empty name")]
    EmptyMemberName(MemberId),

    #[error("Invalid rank: {0} (must be 1-3)")]
    InvalidRank(u8),

    #[error("Duplicate member id: {0}")]
    DuplicateMember(MemberId),

    #[error("Unknown side: {0} (expected attackers, defenders, A or B)")]
    UnknownSide(String),

    #[error("Group {group} references unknown member {member}")]
    UnknownMember { group: GroupId, member: MemberId },

    #[error("Member {member} appears in {count} groups")]
    PartitionViolated { member: MemberId, count: usize },

    #[error("Group {group} holds {size} members (max {max})")]
    CapacityExceeded { group: GroupId, size: usize, max: usize },
}
