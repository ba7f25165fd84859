//! App handlers: command discovery/execution and history navigation.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use navigator_core::commands::ids;
use navigator_core::host::CommandInfo;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::handlers::{AppState, FilepathResponse, execute_and_settle};

/// Create app routes
pub fn app_routes(state: AppState) -> Router {
    Router::new()
        .route("/commands", get(list_commands).post(execute_command))
        .route("/navigate-forward", post(navigate_forward))
        .route("/navigate-back", post(navigate_back))
        .with_state(state)
}

/// `{"commands": [...]}`
#[derive(Debug, Serialize)]
pub struct CommandsResponse {
    pub commands: Vec<CommandInfo>,
}

/// GET /app/commands - enumerate every command the host has registered
async fn list_commands(State(state): State<AppState>) -> Result<Json<CommandsResponse>, ApiError> {
    let commands = state.commands.list()?;
    Ok(Json(CommandsResponse { commands }))
}

#[derive(Debug, Deserialize)]
struct ExecuteCommandRequest {
    /// Command ID from `GET /app/commands`
    id: String,
}

/// POST /app/commands - execute a command by id
async fn execute_command(
    State(state): State<AppState>,
    Json(req): Json<ExecuteCommandRequest>,
) -> Result<StatusCode, ApiError> {
    debug!("executing command {}", req.id);
    state.commands.execute(&req.id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /app/navigate-forward - go forward in history, report the file that
/// ends up open
async fn navigate_forward(
    State(state): State<AppState>,
) -> Result<Json<FilepathResponse>, ApiError> {
    let filepath = execute_and_settle(&state, ids::GO_FORWARD).await?;
    Ok(Json(FilepathResponse { filepath }))
}

/// POST /app/navigate-back - go back in history, report the file that ends
/// up open
async fn navigate_back(State(state): State<AppState>) -> Result<Json<FilepathResponse>, ApiError> {
    let filepath = execute_and_settle(&state, ids::GO_BACK).await?;
    Ok(Json(FilepathResponse { filepath }))
}
