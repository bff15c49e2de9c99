use std::convert::Infallible;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures_util::stream::{self, Stream, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast::error::RecvError;

use crate::api::errors::ApiError;
use crate::domain::board::{BoardSnapshot, DragEnd, GroupId, Side};
use crate::domain::member::{Member, MemberId};
use crate::infrastructure::{BoardStore, BoardUpdate};

/// A member together with the group currently holding it
#[derive(Debug, Serialize, Deserialize)]
pub struct MemberResponse {
    #[serde(flatten)]
    pub member: Member,
    pub group: GroupId,
}

/// Get the whole board
///
/// GET /api/board
pub async fn get_board(State(store): State<BoardStore>) -> Json<BoardSnapshot> {
    Json(store.snapshot().await)
}

/// Get one member
///
/// GET /api/board/members/:id
pub async fn get_member(
    State(store): State<BoardStore>,
    Path(id): Path<String>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member_id = MemberId::new(id)?;
    let (group, member) = store
        .member(&member_id)
        .await
        .ok_or_else(|| ApiError::not_found(format!("Member not found: {}", member_id)))?;

    Ok(Json(MemberResponse { member, group }))
}

/// Report a completed drag gesture
///
/// POST /api/board/drag-end
///
/// Drags that change nothing still answer 200 with `event: null`.
pub async fn drag_end(
    State(store): State<BoardStore>,
    Json(drag): Json<DragEnd>,
) -> Json<BoardUpdate> {
    Json(store.drag_end(&drag).await)
}

/// Credit a win to one side
///
/// POST /api/board/win/:side
pub async fn record_win(
    State(store): State<BoardStore>,
    Path(side): Path<String>,
) -> Result<Json<BoardUpdate>, ApiError> {
    let side: Side = side.parse()?;

    Ok(Json(store.record_win(side).await))
}

/// Stream board updates via SSE
///
/// GET /api/board/stream
///
/// The first message carries the current snapshot with no event.
pub async fn stream_updates(
    State(store): State<BoardStore>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = store.subscribe();
    let initial = BoardUpdate {
        event: None,
        snapshot: store.snapshot().await,
    };

    let updates = stream::unfold(rx, |mut rx| async move {
        match rx.recv().await {
            Ok(update) => Some((Ok(update_event(&update)), rx)),
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "board stream subscriber lagged");
                Some((Ok(Event::default().comment("lagged")), rx))
            }
            Err(RecvError::Closed) => None,
        }
    });

    let stream = stream::once(async move { Ok(update_event(&initial)) }).chain(updates);

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}

fn update_event(update: &BoardUpdate) -> Event {
    match Event::default().event("board").json_data(update) {
        Ok(event) => event,
        Err(e) => {
            tracing::error!(
                error = %e,
                revision = update.snapshot.revision,
                "failed to encode board update"
            );
            Event::default().comment("encode error")
        }
    }
}
