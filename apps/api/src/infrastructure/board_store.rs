use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, Mutex};

use crate::domain::board::{BoardEvent, BoardSnapshot, DragEnd, GroupId, Side, TeamBoard};
use crate::domain::member::{Member, MemberId};

/// Result of applying one action: what happened and the state afterwards
///
/// `event` is `None` when the action was a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardUpdate {
    pub event: Option<BoardEvent>,
    pub snapshot: BoardSnapshot,
}

/// In-memory home of the process's single board
///
/// Each action runs to completion under the lock and its update is
/// published to subscribers before the lock is released, so subscribers
/// see updates in revision order. Nothing is persisted.
#[derive(Debug, Clone)]
pub struct BoardStore {
    board: Arc<Mutex<TeamBoard>>,
    updates: broadcast::Sender<BoardUpdate>,
}

impl BoardStore {
    /// Creates a store around `board`
    ///
    /// # Arguments
    /// * `board` - Initial board state
    /// * `buffer` - Updates kept for slow subscribers (at least 1)
    pub fn new(board: TeamBoard, buffer: usize) -> Self {
        let (updates, _) = broadcast::channel(buffer.max(1));
        Self {
            board: Arc::new(Mutex::new(board)),
            updates,
        }
    }

    /// Current state of the board
    pub async fn snapshot(&self) -> BoardSnapshot {
        self.board.lock().await.snapshot()
    }

    /// Looks up a member and the group holding it
    pub async fn member(&self, id: &MemberId) -> Option<(GroupId, Member)> {
        let board = self.board.lock().await;
        let group = board.group_of(id)?;
        let member = board.member(id)?.clone();
        Some((group, member))
    }

    /// Applies a completed drag gesture
    pub async fn drag_end(&self, drag: &DragEnd) -> BoardUpdate {
        let mut board = self.board.lock().await;
        let revision_before = board.revision();
        let event = board.handle_drag_end(drag);

        match &event {
            Some(BoardEvent::MemberMoved {
                member_id,
                from,
                to,
                redirected,
                ..
            }) => {
                tracing::info!(
                    member_id = %member_id,
                    from = %from,
                    to = %to,
                    redirected = *redirected,
                    revision = board.revision(),
                    "member moved"
                );
            }
            _ => {
                tracing::debug!(member_id = %drag.active, over = ?drag.over, "drag ignored");
            }
        }

        self.publish(event, &board, revision_before)
    }

    /// Credits a win to every member on `side`
    pub async fn record_win(&self, side: Side) -> BoardUpdate {
        let mut board = self.board.lock().await;
        let revision_before = board.revision();
        let event = board.handle_win(side);

        if let BoardEvent::WinRecorded { member_ids, .. } = &event {
            tracing::info!(
                side = %side,
                credited = member_ids.len(),
                revision = board.revision(),
                "win recorded"
            );
        }

        self.publish(Some(event), &board, revision_before)
    }

    /// Receives every update applied from now on
    pub fn subscribe(&self) -> broadcast::Receiver<BoardUpdate> {
        self.updates.subscribe()
    }

    /// Builds the update and broadcasts it if the board changed
    fn publish(
        &self,
        event: Option<BoardEvent>,
        board: &TeamBoard,
        revision_before: u64,
    ) -> BoardUpdate {
        let update = BoardUpdate {
            event,
            snapshot: board.snapshot(),
        };

        if board.revision() != revision_before {
            // No receivers is fine
            let _ = self.updates.send(update.clone());
        }

        update
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new(TeamBoard::seeded(), 64)
    }
}
