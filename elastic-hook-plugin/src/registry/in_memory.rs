//! In-memory connection registry.

use std::collections::HashMap;

use elastic_hook::{ConnectionDescriptor, HookError};

use crate::registry::ConnectionRegistry;

/// Registry backed by an in-process map of connection records.
///
/// Useful for hosts that wire connections programmatically and for tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConnectionRegistry {
    connections: HashMap<String, ConnectionDescriptor>,
}

impl InMemoryConnectionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under the given identifier, replacing any
    /// existing record.
    pub fn register(&mut self, conn_id: impl Into<String>, descriptor: ConnectionDescriptor) {
        self.connections.insert(conn_id.into(), descriptor);
    }
}

impl ConnectionRegistry for InMemoryConnectionRegistry {
    fn resolve(&self, conn_id: &str) -> Result<ConnectionDescriptor, HookError> {
        self.connections
            .get(conn_id)
            .cloned()
            .ok_or_else(|| HookError::connection_not_found(conn_id))
    }
}
