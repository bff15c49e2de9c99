// Board domain module
// Contains the team board aggregate root, value objects, and domain events

#![allow(clippy::module_inception)]

pub mod board;
pub mod errors;
pub mod events;
pub mod roster;
pub mod snapshot;
pub mod value_objects;

// Re-export main types for convenience
pub use board::{TeamBoard, MAX_TEAM_SIZE};
pub use errors::BoardError;
pub use events::BoardEvent;
pub use snapshot::BoardSnapshot;
pub use value_objects::{DragEnd, GroupId, Side};
