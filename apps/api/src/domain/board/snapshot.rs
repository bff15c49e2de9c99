use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::GroupId;
use crate::domain::member::{Member, MemberId};

/// Owned, render-ready view of a board at one revision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub revision: u64,
    pub updated_at: DateTime<Utc>,
    pub unassigned: Vec<Member>,
    pub attackers: Vec<Member>,
    pub defenders: Vec<Member>,
}

impl BoardSnapshot {
    /// Members of `group` in display order
    pub fn group(&self, group: GroupId) -> &[Member] {
        match group {
            GroupId::Unassigned => &self.unassigned,
            GroupId::Attackers => &self.attackers,
            GroupId::Defenders => &self.defenders,
        }
    }

    /// Ids of `group` in display order
    pub fn ids(&self, group: GroupId) -> Vec<&str> {
        self.group(group).iter().map(|m| m.id().as_str()).collect()
    }

    /// Looks a member up across all groups
    pub fn find(&self, id: &MemberId) -> Option<(GroupId, &Member)> {
        GroupId::ALL.into_iter().find_map(|group| {
            self.group(group)
                .iter()
                .find(|m| m.id() == id)
                .map(|m| (group, m))
        })
    }
}
