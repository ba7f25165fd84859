//! Workspace handlers: opening files by link text, tab management, graph
//! view.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use navigator_core::commands::ids;
use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::{AppState, FilepathResponse, MessageResponse, execute_and_settle};

/// Create workspace routes
pub fn workspace_routes(state: AppState) -> Router {
    Router::new()
        .route("/open-link-text", post(open_link_text))
        .route("/tabs/new", post(tab_new))
        .route("/tabs/close", post(tab_close))
        .route("/tabs/close-others", post(tab_close_others))
        .route("/tabs/next", post(tab_next))
        .route("/tabs/prev", post(tab_prev))
        .route("/graph", post(open_graph))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct OpenLinkTextRequest {
    /// Path to the file, relative to the workspace root
    filepath: String,
}

/// POST /workspace/open-link-text - open a file by link text, creating it if
/// it does not exist yet
async fn open_link_text(
    State(state): State<AppState>,
    Json(req): Json<OpenLinkTextRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let workspace = state.context.workspace().await;
    workspace.open_link_text(&req.filepath, "/", false)?;
    Ok(Json(MessageResponse::ok()))
}

/// POST /workspace/tabs/new - open a new tab
async fn tab_new(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.commands.execute(ids::TAB_NEW)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /workspace/tabs/close - close the active tab, report the file that
/// becomes active
async fn tab_close(State(state): State<AppState>) -> Result<Json<FilepathResponse>, ApiError> {
    let filepath = execute_and_settle(&state, ids::TAB_CLOSE).await?;
    Ok(Json(FilepathResponse { filepath }))
}

/// POST /workspace/tabs/close-others - close every tab except the active one
async fn tab_close_others(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.commands.execute(ids::TAB_CLOSE_OTHERS)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /workspace/tabs/next - activate the next tab, report its file
async fn tab_next(State(state): State<AppState>) -> Result<Json<FilepathResponse>, ApiError> {
    let filepath = execute_and_settle(&state, ids::TAB_NEXT).await?;
    Ok(Json(FilepathResponse { filepath }))
}

/// POST /workspace/tabs/prev - activate the previous tab, report its file
async fn tab_prev(State(state): State<AppState>) -> Result<Json<FilepathResponse>, ApiError> {
    let filepath = execute_and_settle(&state, ids::TAB_PREV).await?;
    Ok(Json(FilepathResponse { filepath }))
}

/// POST /workspace/graph - open the graph view
async fn open_graph(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.commands.execute(ids::GRAPH_OPEN)?;
    Ok(StatusCode::NO_CONTENT)
}
