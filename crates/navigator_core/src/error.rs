use thiserror::Error;

/// Unified error type for navigator operations
#[derive(Debug, Error)]
pub enum NavigatorError {
    // Editor errors
    #[error("No active editor found.")]
    NoActiveEditor,

    // Command errors
    #[error("Unknown command id '{0}'")]
    UnknownCommand(String),

    #[error("Host action failed: {0}")]
    HostAction(String),

    #[error("Host command registry unavailable: {0}")]
    HostQuery(String),

    // Settle detection errors
    #[error("Navigation timeout.")]
    NavigationTimeout,

    #[error("Active view stream closed before navigation settled")]
    ViewStreamClosed,
}

/// Result type alias for navigator operations
pub type Result<T> = std::result::Result<T, NavigatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NavigatorError::NoActiveEditor.to_string(),
            "No active editor found."
        );
        assert_eq!(
            NavigatorError::NavigationTimeout.to_string(),
            "Navigation timeout."
        );
        assert_eq!(
            NavigatorError::UnknownCommand("graph:open".to_string()).to_string(),
            "Unknown command id 'graph:open'"
        );
    }
}
