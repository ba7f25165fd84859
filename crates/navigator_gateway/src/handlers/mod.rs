//! Request handlers, grouped the way the routes are nested.
//!
//! Handlers are stateless: each one is a fixed recipe of context reads,
//! command gateway calls and (for navigation) a settle wait. No handler
//! retries, and every core failure is mapped to a response by
//! [`ApiError`](crate::error::ApiError).

use std::sync::Arc;
use std::time::Duration;

use navigator_core::settle::PendingWait;
use navigator_core::{CommandGateway, Context, Result};
use serde::Serialize;

pub mod app;
pub mod daily_notes;
pub mod editor;
pub mod workspace;

pub use app::app_routes;
pub use daily_notes::daily_notes_routes;
pub use editor::editor_routes;
pub use workspace::workspace_routes;

/// Shared state for all handler groups
#[derive(Clone)]
pub struct AppState {
    pub context: Arc<Context>,
    pub commands: CommandGateway,
    pub settle_timeout: Duration,
}

/// `{"filepath": ...}` - the outcome of a navigation action.
///
/// An empty string means the settled view has no document open; that is a
/// valid outcome, distinct from a timeout (which is an error response).
#[derive(Debug, Serialize)]
pub struct FilepathResponse {
    pub filepath: String,
}

/// `{"message": "ok"}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn ok() -> Self {
        MessageResponse {
            message: "ok".to_string(),
        }
    }
}

/// Run a navigation command and wait for it to settle on a document.
///
/// The wait is registered before the fire-and-forget execution so a view
/// change emitted immediately is not missed.
pub(crate) async fn execute_and_settle(state: &AppState, id: &str) -> Result<String> {
    let wait = PendingWait::begin(&state.context).await;
    state.commands.execute(id)?;
    wait.settle(state.settle_timeout).await
}
