//! Test utilities for navigator_core
//!
//! This module provides fake implementations of the host traits so the
//! settle detector, context and gateway handlers can be exercised without a
//! real application. Enabled for this crate's own tests and, behind the
//! `test-utils` feature, for downstream integration tests.

#![allow(missing_docs)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;

use crate::error::{NavigatorError, Result};
use crate::host::{
    ActiveView, CommandInfo, EditorPosition, EditorSurface, Host, OpenLinkTarget, Workspace,
};

/// A recorded `open_link_text` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenLinkCall {
    pub linktext: String,
    pub source_path: String,
    pub new_leaf: bool,
}

/// A fake workspace with a scriptable active-view stream.
///
/// `emit` pushes a notification to every live subscriber; `close_stream`
/// drops the sender so pending waits observe a closed stream.
pub struct FakeWorkspace {
    tx: Mutex<Option<broadcast::Sender<ActiveView>>>,
    active_editor: Mutex<Option<Arc<FakeEditor>>>,
    opened_links: Mutex<Vec<OpenLinkCall>>,
}

impl FakeWorkspace {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(64);
        Self {
            tx: Mutex::new(Some(tx)),
            active_editor: Mutex::new(None),
            opened_links: Mutex::new(Vec::new()),
        }
    }

    /// Push an active-view notification to every subscriber.
    pub fn emit(&self, view: ActiveView) {
        if let Some(tx) = self.tx.lock().unwrap().as_ref() {
            // No subscribers is fine; the notification is simply unobserved.
            let _ = tx.send(view);
        }
    }

    /// Drop the sender so subscribed receivers see the stream close.
    pub fn close_stream(&self) {
        self.tx.lock().unwrap().take();
    }

    /// Number of live subscriptions on the view stream.
    pub fn subscriber_count(&self) -> usize {
        self.tx
            .lock()
            .unwrap()
            .as_ref()
            .map(|tx| tx.receiver_count())
            .unwrap_or(0)
    }

    pub fn set_active_editor(&self, editor: Arc<FakeEditor>) {
        *self.active_editor.lock().unwrap() = Some(editor);
    }

    pub fn clear_active_editor(&self) {
        *self.active_editor.lock().unwrap() = None;
    }

    /// Calls to `open_link_text`, in order (for test assertions).
    pub fn opened_links(&self) -> Vec<OpenLinkCall> {
        self.opened_links.lock().unwrap().clone()
    }
}

impl Default for FakeWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace for FakeWorkspace {
    fn subscribe_active_view(&self) -> broadcast::Receiver<ActiveView> {
        let guard = self.tx.lock().unwrap();
        match guard.as_ref() {
            Some(tx) => tx.subscribe(),
            // Stream already closed: hand out a receiver that reports Closed.
            None => {
                let (tx, rx) = broadcast::channel(1);
                drop(tx);
                rx
            }
        }
    }

    fn active_editor(&self) -> Option<Arc<dyn EditorSurface>> {
        self.active_editor
            .lock()
            .unwrap()
            .clone()
            .map(|e| e as Arc<dyn EditorSurface>)
    }

    fn open_link_text(&self, linktext: &str, source_path: &str, new_leaf: bool) -> Result<()> {
        self.opened_links.lock().unwrap().push(OpenLinkCall {
            linktext: linktext.to_string(),
            source_path: source_path.to_string(),
            new_leaf,
        });
        Ok(())
    }
}

/// A fake host with a scriptable command registry.
///
/// Commands are registered with `with_command`; `with_effect` attaches
/// active-view notifications that are emitted on the workspace stream when
/// that command executes, mimicking the host's asynchronous navigation
/// becoming observable after the fire-and-forget call returns.
pub struct FakeHost {
    commands: Mutex<Vec<CommandInfo>>,
    effects: Mutex<HashMap<String, Vec<ActiveView>>>,
    executed: Mutex<Vec<String>>,
    registry_available: Mutex<bool>,
    workspace: Arc<FakeWorkspace>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            commands: Mutex::new(Vec::new()),
            effects: Mutex::new(HashMap::new()),
            executed: Mutex::new(Vec::new()),
            registry_available: Mutex::new(true),
            workspace: Arc::new(FakeWorkspace::new()),
        }
    }

    /// Register a command (builder pattern).
    pub fn with_command(self, id: &str, name: &str) -> Self {
        self.commands.lock().unwrap().push(CommandInfo {
            id: id.to_string(),
            name: name.to_string(),
        });
        self
    }

    /// Emit `view` on the workspace stream whenever `id` executes
    /// (builder pattern). May be called repeatedly to script a sequence.
    pub fn with_effect(self, id: &str, view: ActiveView) -> Self {
        self.effects
            .lock()
            .unwrap()
            .entry(id.to_string())
            .or_default()
            .push(view);
        self
    }

    /// Make `list_commands` fail with `HostQuery` (builder pattern).
    pub fn with_unavailable_registry(self) -> Self {
        *self.registry_available.lock().unwrap() = false;
        self
    }

    /// The concrete workspace, for emitting and inspection.
    pub fn workspace_handle(&self) -> Arc<FakeWorkspace> {
        self.workspace.clone()
    }

    /// Command ids executed so far, in order.
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

impl Default for FakeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for FakeHost {
    fn list_commands(&self) -> Result<Vec<CommandInfo>> {
        if !*self.registry_available.lock().unwrap() {
            return Err(NavigatorError::HostQuery(
                "command registry unavailable".to_string(),
            ));
        }
        Ok(self.commands.lock().unwrap().clone())
    }

    fn execute_command(&self, id: &str) -> Result<()> {
        let known = self.commands.lock().unwrap().iter().any(|c| c.id == id);
        if !known {
            return Err(NavigatorError::UnknownCommand(id.to_string()));
        }
        self.executed.lock().unwrap().push(id.to_string());

        if let Some(views) = self.effects.lock().unwrap().get(id) {
            for view in views {
                self.workspace.emit(view.clone());
            }
        }
        Ok(())
    }

    fn workspace(&self) -> Arc<dyn Workspace> {
        self.workspace.clone()
    }
}

/// A fake editing surface that records every call made against it.
pub struct FakeEditor {
    scrolls: Mutex<Vec<(u32, bool)>>,
    cursors: Mutex<Vec<EditorPosition>>,
    focus_count: AtomicUsize,
    followed_links: Mutex<Vec<(EditorPosition, OpenLinkTarget)>>,
    link_effect: Mutex<Option<(Arc<FakeWorkspace>, ActiveView)>>,
}

impl FakeEditor {
    pub fn new() -> Self {
        Self {
            scrolls: Mutex::new(Vec::new()),
            cursors: Mutex::new(Vec::new()),
            focus_count: AtomicUsize::new(0),
            followed_links: Mutex::new(Vec::new()),
            link_effect: Mutex::new(None),
        }
    }

    /// Emit `view` on `workspace`'s stream whenever a link is followed
    /// (builder pattern).
    pub fn with_link_effect(self, workspace: Arc<FakeWorkspace>, view: ActiveView) -> Self {
        *self.link_effect.lock().unwrap() = Some((workspace, view));
        self
    }

    pub fn scrolls(&self) -> Vec<(u32, bool)> {
        self.scrolls.lock().unwrap().clone()
    }

    pub fn cursors(&self) -> Vec<EditorPosition> {
        self.cursors.lock().unwrap().clone()
    }

    pub fn focus_count(&self) -> usize {
        self.focus_count.load(Ordering::SeqCst)
    }

    pub fn followed_links(&self) -> Vec<(EditorPosition, OpenLinkTarget)> {
        self.followed_links.lock().unwrap().clone()
    }
}

impl Default for FakeEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSurface for FakeEditor {
    fn scroll_into_view(&self, line: u32, center: bool) {
        self.scrolls.lock().unwrap().push((line, center));
    }

    fn set_cursor(&self, pos: EditorPosition) {
        self.cursors.lock().unwrap().push(pos);
    }

    fn focus(&self) {
        self.focus_count.fetch_add(1, Ordering::SeqCst);
    }

    fn open_link_at(&self, pos: EditorPosition, target: OpenLinkTarget) -> Result<()> {
        self.followed_links.lock().unwrap().push((pos, target));
        if let Some((workspace, view)) = self.link_effect.lock().unwrap().as_ref() {
            workspace.emit(view.clone());
        }
        Ok(())
    }
}
