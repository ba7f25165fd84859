//! Typed access to the host's command registry.
//!
//! The host enumerates its commands by iterating live state and executes them
//! by string id; this module is the one place that indirection lives, so
//! handlers never touch the registry representation themselves.

use std::sync::Arc;

use crate::error::Result;
use crate::host::{CommandInfo, Host};

/// Well-known command ids the routes are built on.
pub mod ids {
    /// Navigate back in history
    pub const GO_BACK: &str = "app:go-back";
    /// Navigate forward in history
    pub const GO_FORWARD: &str = "app:go-forward";
    /// Open today's daily note
    pub const DAILY_NOTE: &str = "daily-notes";
    /// Open the daily note after the current one
    pub const DAILY_NOTE_NEXT: &str = "daily-notes:goto-next";
    /// Open the daily note before the current one
    pub const DAILY_NOTE_PREV: &str = "daily-notes:goto-prev";
    /// Open a new tab
    pub const TAB_NEW: &str = "workspace:new-tab";
    /// Close the active tab
    pub const TAB_CLOSE: &str = "workspace:close";
    /// Close every tab except the active one
    pub const TAB_CLOSE_OTHERS: &str = "workspace:close-others";
    /// Activate the next tab
    pub const TAB_NEXT: &str = "workspace:next-tab";
    /// Activate the previous tab
    pub const TAB_PREV: &str = "workspace:previous-tab";
    /// Open the graph view
    pub const GRAPH_OPEN: &str = "graph:open";
}

/// Gateway from opaque command ids to host actions.
#[derive(Clone)]
pub struct CommandGateway {
    host: Arc<dyn Host>,
}

impl CommandGateway {
    /// Create a gateway over `host`'s registry.
    pub fn new(host: Arc<dyn Host>) -> Self {
        Self { host }
    }

    /// Every command the host currently has registered.
    ///
    /// Order is host-defined; fails with `HostQuery` when the registry is
    /// unavailable.
    pub fn list(&self) -> Result<Vec<CommandInfo>> {
        self.host.list_commands()
    }

    /// Execute the host action named by `id`.
    ///
    /// Returns before any resulting view change is visible; callers that need
    /// to observe the change register a [`PendingWait`](crate::PendingWait)
    /// first.
    pub fn execute(&self, id: &str) -> Result<()> {
        self.host.execute_command(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavigatorError;
    use crate::test_utils::FakeHost;

    #[test]
    fn test_list_returns_registered_commands() {
        let host = Arc::new(
            FakeHost::new()
                .with_command("daily-notes", "Daily notes: Open today's daily note")
                .with_command("graph:open", "Graph view: Open graph view"),
        );
        let gateway = CommandGateway::new(host);

        let commands = gateway.list().unwrap();
        assert_eq!(commands.len(), 2);
        assert!(commands.iter().any(|c| c.id == "daily-notes"));
    }

    #[test]
    fn test_execute_unknown_id_fails() {
        let host = Arc::new(FakeHost::new());
        let gateway = CommandGateway::new(host);

        let err = gateway.execute("no-such-command").unwrap_err();
        assert!(matches!(err, NavigatorError::UnknownCommand(_)));
    }

    #[test]
    fn test_execute_records_invocation() {
        let host = Arc::new(FakeHost::new().with_command("workspace:new-tab", "New tab"));
        let gateway = CommandGateway::new(host.clone());

        gateway.execute("workspace:new-tab").unwrap();
        assert_eq!(host.executed(), vec!["workspace:new-tab".to_string()]);
    }
}
