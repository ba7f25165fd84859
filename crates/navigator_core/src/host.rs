//! Host abstraction traits.
//!
//! The gateway never talks to a concrete application directly. Everything it
//! needs from the host - the command registry, the workspace's view-change
//! notifications, the focused editor widget - is expressed as a trait here,
//! so handlers and the settle detector can be exercised against fakes.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::broadcast;

use crate::error::Result;

/// A command registered with the host, as discovered by enumeration.
///
/// The `id` is an opaque token. It is stable within a session but not
/// guaranteed stable across host versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandInfo {
    /// Opaque command identifier, e.g. `daily-notes:goto-next`
    pub id: String,
    /// Human-readable display name
    pub name: String,
}

/// The view that just became active in the workspace.
///
/// Navigation may traverse transient non-document states (a sidebar panel, a
/// tab whose content has not loaded); settle detection skips `Panel`
/// notifications and resolves only on `Document`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveView {
    /// A document-bearing view. `path` is the open file's path relative to
    /// the workspace root, or `None` when the view has no file yet.
    Document {
        /// Relative path of the open document, if any
        path: Option<String>,
    },
    /// Any view that does not carry a document (graph, outline, search, ...)
    Panel,
}

/// A position inside an editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorPosition {
    /// Zero-based line number
    pub line: u32,
    /// Zero-based character offset within the line
    pub ch: u32,
}

/// Where a followed link should open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenLinkTarget {
    /// Open in a new pane instead of replacing the current one
    pub new_leaf: bool,
    /// Open in a new window
    pub new_window: bool,
}

/// The interactive application being remotely controlled.
pub trait Host: Send + Sync {
    /// Enumerates every command currently registered with the host.
    ///
    /// Order is host-defined and not guaranteed stable. Fails with
    /// [`NavigatorError::HostQuery`](crate::NavigatorError::HostQuery) if the
    /// registry is unavailable.
    fn list_commands(&self) -> Result<Vec<CommandInfo>>;

    /// Invokes the host action named by `id`.
    ///
    /// Fire-and-forget: this returns before any resulting view change is
    /// visible. Callers needing to observe the change must register a
    /// [`PendingWait`](crate::PendingWait) before invoking.
    fn execute_command(&self, id: &str) -> Result<()>;

    /// The host's current workspace.
    fn workspace(&self) -> Arc<dyn Workspace>;
}

/// The host's arrangement of views and tabs.
pub trait Workspace: Send + Sync {
    /// Subscribes to the "active view changed" notification stream.
    ///
    /// Dropping the receiver is the unsubscribe; there is no separate
    /// teardown call.
    fn subscribe_active_view(&self) -> broadcast::Receiver<ActiveView>;

    /// The editing surface currently receiving focus, if any.
    fn active_editor(&self) -> Option<Arc<dyn EditorSurface>>;

    /// Opens the file named by `linktext` (creating it if it does not exist),
    /// resolved relative to `source_path`.
    fn open_link_text(&self, linktext: &str, source_path: &str, new_leaf: bool) -> Result<()>;
}

/// The text-editing widget currently receiving focus.
pub trait EditorSurface: Send + Sync {
    /// Scrolls the given line into view. `center` keeps it vertically
    /// centered rather than minimally visible.
    fn scroll_into_view(&self, line: u32, center: bool);

    /// Moves the cursor.
    fn set_cursor(&self, pos: EditorPosition);

    /// Gives this surface keyboard focus.
    fn focus(&self);

    /// Follows the link under `pos`, opening its target per `target`.
    ///
    /// Fire-and-forget like command execution: the resulting navigation is
    /// observed through the workspace's view stream.
    fn open_link_at(&self, pos: EditorPosition, target: OpenLinkTarget) -> Result<()>;
}

impl std::fmt::Debug for dyn EditorSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn EditorSurface")
    }
}
