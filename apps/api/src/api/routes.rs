use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers::{board, health};
use crate::infrastructure::BoardStore;

/// Builds the API router over `store`
///
/// Middleware (tracing, CORS) is layered on by the caller.
pub fn router(store: BoardStore) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Board routes
        .route("/api/board", get(board::get_board))
        .route("/api/board/members/:id", get(board::get_member))
        .route("/api/board/drag-end", post(board::drag_end))
        .route("/api/board/win/:side", post(board::record_win))
        .route("/api/board/stream", get(board::stream_updates))
        // Shared state
        .with_state(store)
}
