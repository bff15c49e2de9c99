use serde::{Deserialize, Serialize};

use super::errors::BoardError;
use crate::domain::member::MemberId;

/// One of the three partitions of the roster
///
/// The string form doubles as the drop-zone id the drag engine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupId {
    /// Pool of members not on a team
    Unassigned,
    /// Attacking team, capped
    Attackers,
    /// Defending team, capped
    Defenders,
}

impl GroupId {
    pub const ALL: [GroupId; 3] = [GroupId::Unassigned, GroupId::Attackers, GroupId::Defenders];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupId::Unassigned => "unassigned",
            GroupId::Attackers => "attackers",
            GroupId::Defenders => "defenders",
        }
    }

    /// Resolves a drop-zone id into a group
    ///
    /// Returns `None` for ids that name no group. Matching is exact, the
    /// drop zones are registered with these literal ids.
    ///
    /// # Example
    /// ```
    /// use teamboard_api::domain::board::value_objects::GroupId;
    ///
    /// assert_eq!(GroupId::from_drop_zone("attackers"), Some(GroupId::Attackers));
    /// assert_eq!(GroupId::from_drop_zone("sidebar"), None);
    /// ```
    pub fn from_drop_zone(zone: &str) -> Option<GroupId> {
        GroupId::ALL.into_iter().find(|group| group.as_str() == zone)
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A group that can be credited with a win
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Attackers,
    Defenders,
}

impl Side {
    pub fn group(&self) -> GroupId {
        match self {
            Side::Attackers => GroupId::Attackers,
            Side::Defenders => GroupId::Defenders,
        }
    }
}

impl From<Side> for GroupId {
    fn from(side: Side) -> Self {
        side.group()
    }
}

impl std::str::FromStr for Side {
    type Err = BoardError;

    /// Accepts the exact group ids and the short button codes `A` / `B`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attackers" | "A" => Ok(Side::Attackers),
            "defenders" | "B" => Ok(Side::Defenders),
            _ => Err(BoardError::UnknownSide(s.to_string())),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.group().as_str())
    }
}

/// A completed drag gesture as resolved by the drag engine
///
/// `over` is the id of the drop zone under the pointer when the gesture
/// ended, or `None` when it ended over nothing droppable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEnd {
    pub active: MemberId,
    #[serde(default)]
    pub over: Option<String>,
}

impl DragEnd {
    /// Gesture that ended over the drop zone `zone`
    pub fn onto(active: MemberId, zone: impl Into<String>) -> Self {
        Self {
            active,
            over: Some(zone.into()),
        }
    }

    /// Gesture that ended over no drop zone
    pub fn released(active: MemberId) -> Self {
        Self { active, over: None }
    }
}
