//! Settle detection.
//!
//! Navigation in the host is fire-and-forget: executing `daily-notes` returns
//! immediately, and the newly opened document only becomes observable through
//! the workspace's "active view changed" notifications, possibly after
//! several intermediate non-document views. This module bridges that to
//! callers who need a synchronous "which file is now open" answer within a
//! bounded time.

use std::time::Duration;

use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::RecvError;
use tokio::time;

use crate::context::Context;
use crate::error::{NavigatorError, Result};
use crate::host::ActiveView;

/// Safety timeout for a settle wait.
pub const DEFAULT_SETTLE_TIMEOUT: Duration = Duration::from_millis(1000);

/// One in-flight settle wait.
///
/// Created with [`begin`](PendingWait::begin) *before* the navigation action
/// runs, so a change emitted between execution and waiting is not missed.
/// The subscription lives exactly as long as this value: dropping it (which
/// [`settle`](PendingWait::settle) does on every exit path, success or not)
/// is the unsubscribe, so a wait can never leak its listener or be resolved
/// twice.
pub struct PendingWait {
    rx: Receiver<ActiveView>,
}

impl PendingWait {
    /// Subscribe to the context's workspace view stream.
    pub async fn begin(context: &Context) -> Self {
        let rx = context.workspace().await.subscribe_active_view();
        Self { rx }
    }

    /// Wait until navigation settles on a document-bearing view, or `timeout`
    /// elapses.
    ///
    /// Resolves with the document's path, or the empty string when the
    /// settled view has no file open. Non-document views are skipped without
    /// resolving; a lagged receiver skips ahead and keeps waiting. Errors:
    /// `NavigationTimeout` when the deadline fires first, `ViewStreamClosed`
    /// when the workspace drops the stream.
    pub async fn settle(mut self, timeout: Duration) -> Result<String> {
        match time::timeout(timeout, self.next_document()).await {
            Ok(outcome) => outcome,
            Err(_) => Err(NavigatorError::NavigationTimeout),
        }
    }

    async fn next_document(&mut self) -> Result<String> {
        loop {
            match self.rx.recv().await {
                Ok(ActiveView::Document { path }) => return Ok(path.unwrap_or_default()),
                // Intermediate panel views: a single navigation may surface
                // several of these before the document view arrives.
                Ok(ActiveView::Panel) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    log::debug!("view stream lagged, skipped {} notifications", skipped);
                    continue;
                }
                Err(RecvError::Closed) => return Err(NavigatorError::ViewStreamClosed),
            }
        }
    }
}

/// Subscribe and wait in one step, with the contract of
/// [`PendingWait::settle`].
///
/// Handlers that trigger the navigation themselves use the split
/// [`PendingWait::begin`] form instead, so the listener is registered before
/// the fire-and-forget action runs.
pub async fn await_settled_document(context: &Context, timeout: Duration) -> Result<String> {
    PendingWait::begin(context).await.settle(timeout).await
}
