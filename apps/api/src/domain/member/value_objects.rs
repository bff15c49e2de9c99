use serde::{Deserialize, Serialize};

use crate::domain::board::errors::BoardError;

/// Stable identifier of a roster member
///
/// Ids are opaque strings chosen by whoever seeds the roster. The drag
/// engine reports them back verbatim, so no normalization is applied.
///
/// # Example
/// ```
/// use teamboard_api::domain::member::value_objects::MemberId;
///
/// let id = MemberId::new("3").expect("valid id");
/// assert_eq!(id.as_str(), "3");
/// assert!(MemberId::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Creates a member id, rejecting empty strings
    pub fn new(value: impl Into<String>) -> Result<Self, BoardError> {
        let value = value.into();
        if value.is_empty() {
            return Err(BoardError::EmptyMemberId);
        }
        Ok(Self(value))
    }

    /// Builds an id from fixed seed data without validation
    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_string())
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for MemberId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MemberId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Display-only skill tier of a member
///
/// Valid ranks are 1 through 3. Rank never takes part in group logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    pub const ONE: Rank = Rank(1);
    pub const TWO: Rank = Rank(2);
    pub const THREE: Rank = Rank(3);

    /// Creates a rank, rejecting values outside `1..=3`
    pub fn new(value: u8) -> Result<Self, BoardError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(BoardError::InvalidRank(value));
        }
        Ok(Self(value))
    }

    /// Returns the numeric rank
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rank {
    type Error = BoardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R{}", self.0)
    }
}
