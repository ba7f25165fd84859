//! Editor handlers: act on the focused editing surface.
//!
//! Every route here resolves the active editor through the context first,
//! discovering and caching it from the workspace when absent; when neither
//! exists the request fails as a precondition error, never as a timeout.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use navigator_core::host::{EditorPosition, OpenLinkTarget};
use navigator_core::settle::PendingWait;
use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::{AppState, FilepathResponse};

/// Create editor routes
pub fn editor_routes(state: AppState) -> Router {
    Router::new()
        .route("/scroll-into-view", post(scroll_into_view))
        .route("/open-link", post(open_link))
        .route("/focus", get(focus).post(focus))
        .route("/cursor", post(cursor))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct LineRequest {
    line: u32,
}

/// POST /editor/scroll-into-view - sync the scroll position to a line,
/// keeping it centered
async fn scroll_into_view(
    State(state): State<AppState>,
    Json(req): Json<LineRequest>,
) -> Result<StatusCode, ApiError> {
    let editor = state.context.resolve_editor().await?;
    editor.scroll_into_view(req.line, true);
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OpenLinkRequest {
    line: u32,
    ch: u32,
    #[serde(default)]
    new_leaf: bool,
    #[serde(default)]
    new_window: bool,
}

/// POST /editor/open-link - follow the link under the given position, report
/// the file that ends up open
async fn open_link(
    State(state): State<AppState>,
    Json(req): Json<OpenLinkRequest>,
) -> Result<Json<FilepathResponse>, ApiError> {
    let editor = state.context.resolve_editor().await?;

    let wait = PendingWait::begin(&state.context).await;
    editor.open_link_at(
        EditorPosition {
            line: req.line,
            ch: req.ch,
        },
        OpenLinkTarget {
            new_leaf: req.new_leaf,
            new_window: req.new_window,
        },
    )?;

    let filepath = wait.settle(state.settle_timeout).await?;
    Ok(Json(FilepathResponse { filepath }))
}

/// GET|POST /editor/focus - give the active editor keyboard focus
async fn focus(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    let editor = state.context.resolve_editor().await?;
    editor.focus();
    Ok(StatusCode::NO_CONTENT)
}

/// POST /editor/cursor - place the cursor at the start of a line
async fn cursor(
    State(state): State<AppState>,
    Json(req): Json<LineRequest>,
) -> Result<StatusCode, ApiError> {
    let editor = state.context.resolve_editor().await?;
    editor.set_cursor(EditorPosition {
        line: req.line,
        ch: 0,
    });
    Ok(StatusCode::NO_CONTENT)
}
