use serde::{Deserialize, Serialize};

use super::value_objects::{GroupId, Side};
use crate::domain::member::MemberId;

/// Domain events emitted by the TeamBoard aggregate
///
/// One event per state change. Drags that end up as no-ops emit nothing.
///
/// # Example
/// ```
/// use teamboard_api::domain::board::events::BoardEvent;
/// use teamboard_api::domain::board::value_objects::GroupId;
/// use teamboard_api::domain::member::MemberId;
///
/// let event = BoardEvent::MemberMoved {
///     member_id: MemberId::new("3").unwrap(),
///     from: GroupId::Unassigned,
///     to: GroupId::Attackers,
///     drop_zone: "attackers".to_string(),
///     redirected: false,
/// };
/// assert!(matches!(event, BoardEvent::MemberMoved { redirected: false, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    /// A drag completed over a drop zone and the member was re-placed
    MemberMoved {
        member_id: MemberId,
        from: GroupId,
        to: GroupId,
        /// Raw drop-zone id reported by the drag engine
        drop_zone: String,
        /// True when the requested team was full or unknown and the member
        /// went to the pool instead
        redirected: bool,
    },
    /// A side was credited with a win
    WinRecorded {
        side: Side,
        /// Members whose wins were incremented, in group order
        member_ids: Vec<MemberId>,
    },
}
