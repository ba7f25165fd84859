#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Command gateway (typed access to the host's command registry)
pub mod commands;

/// Shared session context (host, workspace, active editor)
pub mod context;

/// Error (common error types)
pub mod error;

/// Host abstraction traits and view/editor types
pub mod host;

/// Settle detection (await a navigation reaching a document-bearing view)
pub mod settle;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use commands::CommandGateway;
pub use context::Context;
pub use error::{NavigatorError, Result};
pub use host::{ActiveView, CommandInfo, EditorSurface, Host, Workspace};
pub use settle::{DEFAULT_SETTLE_TIMEOUT, PendingWait, await_settled_document};
