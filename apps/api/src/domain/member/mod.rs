// Member domain module
// Roster member record and its value objects

#![allow(clippy::module_inception)]

pub mod member;
pub mod value_objects;

pub use member::Member;
pub use value_objects::{MemberId, Rank};
