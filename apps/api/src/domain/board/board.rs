use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use super::errors::BoardError;
use super::events::BoardEvent;
use super::roster::seed_roster;
use super::snapshot::BoardSnapshot;
use super::value_objects::{DragEnd, GroupId, Side};
use crate::domain::member::{Member, MemberId};

/// Most members a team group may hold
pub const MAX_TEAM_SIZE: usize = 5;

/// TeamBoard aggregate root
///
/// Owns the roster and its split into the unassigned pool and the two
/// teams. Membership changes only through completed drags, wins only
/// through recorded wins.
///
/// # Invariants
/// - Every member id sits in exactly one group
/// - Attackers and defenders hold at most `MAX_TEAM_SIZE` members each
/// - The roster never grows or shrinks after construction
/// - Group order is join order
///
/// # Example
/// ```
/// use teamboard_api::domain::board::{DragEnd, GroupId, Side, TeamBoard};
/// use teamboard_api::domain::member::MemberId;
///
/// let mut board = TeamBoard::seeded();
/// let charlie = MemberId::new("3").unwrap();
///
/// board.handle_drag_end(&DragEnd::onto(charlie.clone(), "attackers"));
/// board.handle_win(Side::Attackers);
///
/// assert_eq!(board.group_of(&charlie), Some(GroupId::Attackers));
/// assert_eq!(board.member(&charlie).unwrap().wins(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TeamBoard {
    members: HashMap<MemberId, Member>,
    unassigned: Vec<MemberId>,
    attackers: Vec<MemberId>,
    defenders: Vec<MemberId>,
    revision: u64,
    updated_at: DateTime<Utc>,
}

impl TeamBoard {
    /// Creates a board over the built-in ten-member roster
    pub fn seeded() -> Self {
        Self::from_members(seed_roster())
    }

    /// Creates a board over an explicit roster, everyone unassigned
    ///
    /// Wins carried by the given members are kept as-is.
    ///
    /// # Returns
    /// * `Ok(TeamBoard)` - Board with every member in the pool, in roster order
    /// * `Err(BoardError)` - If a member has a blank name or an id repeats
    pub fn from_roster(roster: Vec<Member>) -> Result<Self, BoardError> {
        let mut seen = HashSet::new();
        for member in &roster {
            if member.id().as_str().is_empty() {
                return Err(BoardError::EmptyMemberId);
            }
            if member.name().trim().is_empty() {
                return Err(BoardError::EmptyMemberName(member.id().clone()));
            }
            if !seen.insert(member.id().clone()) {
                return Err(BoardError::DuplicateMember(member.id().clone()));
            }
        }

        Ok(Self::from_members(roster))
    }

    fn from_members(roster: Vec<Member>) -> Self {
        let unassigned = roster.iter().map(|m| m.id().clone()).collect();
        let members = roster.into_iter().map(|m| (m.id().clone(), m)).collect();

        Self {
            members,
            unassigned,
            attackers: Vec::new(),
            defenders: Vec::new(),
            revision: 0,
            updated_at: Utc::now(),
        }
    }

    /// Applies a completed drag gesture
    ///
    /// The member is taken out of its current group and appended to the
    /// requested team if that team had room when the drag ended; otherwise
    /// it goes to the end of the pool. A full team is checked before the
    /// member leaves its old group, so dropping a member of a full team onto
    /// that same team sends it to the pool.
    ///
    /// # Returns
    /// * `Some(BoardEvent::MemberMoved)` - The member was re-placed
    /// * `None` - No drop zone, or the id is not on the roster; nothing changed
    pub fn handle_drag_end(&mut self, drag: &DragEnd) -> Option<BoardEvent> {
        let Some(drop_zone) = drag.over.as_deref() else {
            tracing::debug!(member_id = %drag.active, "drag released outside any drop zone");
            return None;
        };

        let Some(from) = self.group_of(&drag.active) else {
            tracing::debug!(member_id = %drag.active, "dragged id is not on the board");
            return None;
        };

        let attackers_before = self.attackers.len();
        let defenders_before = self.defenders.len();

        self.slot_mut(from).retain(|id| id != &drag.active);

        let requested = GroupId::from_drop_zone(drop_zone);
        let to = match requested {
            Some(GroupId::Attackers) if attackers_before < MAX_TEAM_SIZE => GroupId::Attackers,
            Some(GroupId::Defenders) if defenders_before < MAX_TEAM_SIZE => GroupId::Defenders,
            _ => GroupId::Unassigned,
        };

        self.slot_mut(to).push(drag.active.clone());
        self.touch();

        Some(BoardEvent::MemberMoved {
            member_id: drag.active.clone(),
            from,
            to,
            drop_zone: drop_zone.to_string(),
            redirected: requested != Some(to),
        })
    }

    /// Credits one win to every member currently on `side`
    ///
    /// Membership is read at call time. An empty side produces an event with
    /// no members and leaves the revision alone.
    pub fn handle_win(&mut self, side: Side) -> BoardEvent {
        let member_ids = self.slot(side.group()).clone();

        for id in &member_ids {
            if let Some(member) = self.members.get_mut(id) {
                member.record_win();
            }
        }

        if !member_ids.is_empty() {
            self.touch();
        }

        BoardEvent::WinRecorded { side, member_ids }
    }

    // ===== Queries =====

    /// Ids in `group`, in join order
    pub fn group_ids(&self, group: GroupId) -> &[MemberId] {
        self.slot(group)
    }

    /// Members in `group`, in join order
    pub fn group(&self, group: GroupId) -> Vec<&Member> {
        self.slot(group)
            .iter()
            .filter_map(|id| self.members.get(id))
            .collect()
    }

    /// Which group holds `id`
    pub fn group_of(&self, id: &MemberId) -> Option<GroupId> {
        GroupId::ALL
            .into_iter()
            .find(|group| self.slot(*group).contains(id))
    }

    pub fn member(&self, id: &MemberId) -> Option<&Member> {
        self.members.get(id)
    }

    pub fn roster_size(&self) -> usize {
        self.members.len()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Copies the current state into a serializable snapshot
    pub fn snapshot(&self) -> BoardSnapshot {
        let owned = |group: GroupId| -> Vec<Member> {
            self.group(group).into_iter().cloned().collect()
        };

        BoardSnapshot {
            revision: self.revision,
            updated_at: self.updated_at,
            unassigned: owned(GroupId::Unassigned),
            attackers: owned(GroupId::Attackers),
            defenders: owned(GroupId::Defenders),
        }
    }

    /// Checks the partition and capacity invariants
    pub fn verify_invariants(&self) -> Result<(), BoardError> {
        let mut placements: HashMap<&MemberId, usize> = HashMap::new();

        for group in GroupId::ALL {
            let slot = self.slot(group);

            if group != GroupId::Unassigned && slot.len() > MAX_TEAM_SIZE {
                return Err(BoardError::CapacityExceeded {
                    group,
                    size: slot.len(),
                    max: MAX_TEAM_SIZE,
                });
            }

            for id in slot {
                if !self.members.contains_key(id) {
                    return Err(BoardError::UnknownMember {
                        group,
                        member: id.clone(),
                    });
                }
                *placements.entry(id).or_default() += 1;
            }
        }

        // Sorted so the reported member is deterministic
        let mut ids: Vec<&MemberId> = self.members.keys().collect();
        ids.sort();
        for id in ids {
            let count = placements.get(id).copied().unwrap_or(0);
            if count != 1 {
                return Err(BoardError::PartitionViolated {
                    member: id.clone(),
                    count,
                });
            }
        }

        Ok(())
    }

    fn slot(&self, group: GroupId) -> &Vec<MemberId> {
        match group {
            GroupId::Unassigned => &self.unassigned,
            GroupId::Attackers => &self.attackers,
            GroupId::Defenders => &self.defenders,
        }
    }

    fn slot_mut(&mut self, group: GroupId) -> &mut Vec<MemberId> {
        match group {
            GroupId::Unassigned => &mut self.unassigned,
            GroupId::Attackers => &mut self.attackers,
            GroupId::Defenders => &mut self.defenders,
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.updated_at = Utc::now();
    }
}

impl Default for TeamBoard {
    fn default() -> Self {
        Self::seeded()
    }
}
