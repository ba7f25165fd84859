//! Shared session context.
//!
//! One `Context` is created when the gateway starts and handed to every
//! handler. It is the single consistent view of "what is currently active",
//! so an editor action issued shortly after a navigation operates on the
//! newly opened document rather than a stale one.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::{NavigatorError, Result};
use crate::host::{EditorSurface, Host, Workspace};

/// Process-wide mutable state shared across handlers.
///
/// `host` never changes after construction. `workspace` is seeded from the
/// host and replaceable. `editor` starts absent and is populated lazily the
/// first time an action discovers an active editing surface; it is
/// overwritten whenever a new one is discovered.
pub struct Context {
    host: Arc<dyn Host>,
    workspace: RwLock<Arc<dyn Workspace>>,
    editor: RwLock<Option<Arc<dyn EditorSurface>>>,
}

impl Context {
    /// Create a context for `host`, seeding the workspace from it.
    pub fn new(host: Arc<dyn Host>) -> Self {
        let workspace = host.workspace();
        Self {
            host,
            workspace: RwLock::new(workspace),
            editor: RwLock::new(None),
        }
    }

    /// The application handle. Immutable for the lifetime of the context.
    pub fn host(&self) -> Arc<dyn Host> {
        self.host.clone()
    }

    /// The current workspace handle.
    pub async fn workspace(&self) -> Arc<dyn Workspace> {
        self.workspace.read().await.clone()
    }

    /// Replace the current workspace handle.
    pub async fn set_workspace(&self, workspace: Arc<dyn Workspace>) {
        *self.workspace.write().await = workspace;
    }

    /// The cached active editor, or `None` if none has been discovered yet.
    ///
    /// Absence is a value, not an error; use [`resolve_editor`] for the
    /// discover-and-cache path.
    ///
    /// [`resolve_editor`]: Context::resolve_editor
    pub async fn editor(&self) -> Option<Arc<dyn EditorSurface>> {
        self.editor.read().await.clone()
    }

    /// Cache `editor` as the active editing surface.
    pub async fn set_editor(&self, editor: Arc<dyn EditorSurface>) {
        *self.editor.write().await = Some(editor);
    }

    /// The cached editor, or the workspace's active one (cached on the way
    /// out). Fails with `NoActiveEditor` when neither exists.
    pub async fn resolve_editor(&self) -> Result<Arc<dyn EditorSurface>> {
        if let Some(editor) = self.editor().await {
            return Ok(editor);
        }

        let workspace = self.workspace().await;
        match workspace.active_editor() {
            Some(editor) => {
                self.set_editor(editor.clone()).await;
                Ok(editor)
            }
            None => Err(NavigatorError::NoActiveEditor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FakeEditor, FakeHost};

    #[tokio::test]
    async fn test_editor_absent_before_discovery() {
        let host = Arc::new(FakeHost::new());
        let ctx = Context::new(host);

        assert!(ctx.editor().await.is_none());
    }

    #[tokio::test]
    async fn test_set_editor_then_get_returns_same_reference() {
        let host = Arc::new(FakeHost::new());
        let ctx = Context::new(host);

        let editor = Arc::new(FakeEditor::new());
        ctx.set_editor(editor.clone()).await;

        let got = ctx.editor().await.unwrap();
        assert!(Arc::ptr_eq(
            &(editor as Arc<dyn EditorSurface>),
            &got
        ));
    }

    #[tokio::test]
    async fn test_resolve_editor_discovers_and_caches() {
        let host = Arc::new(FakeHost::new());
        let editor = Arc::new(FakeEditor::new());
        host.workspace_handle().set_active_editor(editor.clone());

        let ctx = Context::new(host.clone());
        assert!(ctx.editor().await.is_none());

        let resolved = ctx.resolve_editor().await.unwrap();
        assert!(Arc::ptr_eq(
            &(editor as Arc<dyn EditorSurface>),
            &resolved
        ));

        // Now cached: clearing the workspace's editor no longer matters.
        host.workspace_handle().clear_active_editor();
        assert!(ctx.resolve_editor().await.is_ok());
    }

    #[tokio::test]
    async fn test_resolve_editor_fails_when_none_exists() {
        let host = Arc::new(FakeHost::new());
        let ctx = Context::new(host);

        let err = ctx.resolve_editor().await.unwrap_err();
        assert!(matches!(err, NavigatorError::NoActiveEditor));
    }
}
