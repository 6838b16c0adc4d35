//! Hook error types.
//!
//! This module defines the unified error type for everything that can fail
//! between a connection identifier and a backend response: registry lookup,
//! configuration mapping, and pass-through failures from the wrapped client.

use thiserror::Error;

/// Unified errors for connection resolution and document store operations.
///
/// Construction-time errors (`ConnectionNotFound`, `InvalidConfig`) are fatal
/// and never retried. `UpstreamError` wraps whatever the underlying client
/// surfaced during an operation; retry policy, if any, belongs to the caller.
#[derive(Debug, Clone, Error)]
pub enum HookError {
    /// The connection identifier has no registered descriptor.
    #[error("Connection not found: {0}")]
    ConnectionNotFound(String),

    /// A present descriptor field failed to parse (e.g. a non-numeric port),
    /// or the client transport could not be built from the derived config.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failure surfaced by the underlying store client during an operation.
    #[error("Upstream error: {0}")]
    UpstreamError(String),
}

impl HookError {
    /// Create a connection-not-found error.
    pub fn connection_not_found(conn_id: impl Into<String>) -> Self {
        Self::ConnectionNotFound(conn_id.into())
    }

    /// Create an invalid-configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an upstream error.
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::UpstreamError(msg.into())
    }
}
