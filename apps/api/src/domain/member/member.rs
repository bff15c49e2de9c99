use serde::{Deserialize, Serialize};

use super::value_objects::{MemberId, Rank};
use crate::domain::board::errors::BoardError;

/// A person on the roster
///
/// # Invariants
/// - Id and name are non-empty
/// - Name and rank never change after construction
/// - Wins only grow, one at a time, through a recorded win
///
/// # Example
/// ```
/// use teamboard_api::domain::member::{Member, MemberId, Rank};
///
/// let member = Member::new(
///     MemberId::new("1").unwrap(),
///     "Alice".to_string(),
///     Rank::THREE,
/// ).expect("valid member");
///
/// assert_eq!(member.name(), "Alice");
/// assert_eq!(member.wins(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    name: String,
    rank: Rank,
    wins: u32,
}

impl Member {
    /// Creates a new member with zero wins
    ///
    /// # Returns
    /// * `Ok(Member)` - The new member
    /// * `Err(BoardError::EmptyMemberName)` - If the name is blank
    pub fn new(id: MemberId, name: String, rank: Rank) -> Result<Self, BoardError> {
        if name.trim().is_empty() {
            return Err(BoardError::EmptyMemberName(id));
        }

        Ok(Self {
            id,
            name,
            rank,
            wins: 0,
        })
    }

    /// Builds a member from fixed seed data
    ///
    /// Skips validation; only the built-in roster uses this.
    pub(crate) fn from_seed(id: &'static str, name: &'static str, rank: Rank) -> Self {
        Self {
            id: MemberId::from_static(id),
            name: name.to_string(),
            rank,
            wins: 0,
        }
    }

    /// Adds one win
    pub(crate) fn record_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
    }

    pub fn id(&self) -> &MemberId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_member_with_valid_name() {
        let member = Member::new(MemberId::new("2").unwrap(), "Bob".to_string(), Rank::TWO).unwrap();

        assert_eq!(member.id(), &MemberId::new("2").unwrap());
        assert_eq!(member.name(), "Bob");
        assert_eq!(member.rank(), Rank::TWO);
        assert_eq!(member.wins(), 0);
    }

    #[test]
    fn create_member_with_blank_name_fails() {
        let result = Member::new(MemberId::new("2").unwrap(), "   ".to_string(), Rank::TWO);

        assert!(matches!(result, Err(BoardError::EmptyMemberName(_))));
    }

    #[test]
    fn record_win_increments_by_one() {
        let mut member = Member::from_seed("5", "Eve", Rank::THREE);
        member.record_win();
        member.record_win();

        assert_eq!(member.wins(), 2);
    }

    #[test]
    fn member_serializes_flat() {
        let member = Member::from_seed("3", "Charlie", Rank::ONE);
        let json = serde_json::to_value(&member).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "id": "3", "name": "Charlie", "rank": 1, "wins": 0 })
        );
    }
}
