//! Daily-notes handlers: navigate between daily notes.
//!
//! All three are plain command executions on the host's daily-notes plugin;
//! what makes them interesting is the settle wait, since the caller wants to
//! know which note ended up open.

use axum::{Json, Router, extract::State, routing::post};
use navigator_core::commands::ids;

use crate::error::ApiError;
use crate::handlers::{AppState, FilepathResponse, execute_and_settle};

/// Create daily-notes routes
pub fn daily_notes_routes(state: AppState) -> Router {
    Router::new()
        .route("/today", post(today))
        .route("/next", post(next))
        .route("/prev", post(prev))
        .with_state(state)
}

/// POST /daily-notes/today - open today's daily note
async fn today(State(state): State<AppState>) -> Result<Json<FilepathResponse>, ApiError> {
    let filepath = execute_and_settle(&state, ids::DAILY_NOTE).await?;
    Ok(Json(FilepathResponse { filepath }))
}

/// POST /daily-notes/next - open the next daily note
async fn next(State(state): State<AppState>) -> Result<Json<FilepathResponse>, ApiError> {
    let filepath = execute_and_settle(&state, ids::DAILY_NOTE_NEXT).await?;
    Ok(Json(FilepathResponse { filepath }))
}

/// POST /daily-notes/prev - open the previous daily note
async fn prev(State(state): State<AppState>) -> Result<Json<FilepathResponse>, ApiError> {
    let filepath = execute_and_settle(&state, ids::DAILY_NOTE_PREV).await?;
    Ok(Json(FilepathResponse { filepath }))
}
