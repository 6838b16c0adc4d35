//! Elasticsearch hook implementation.
//!
//! This module provides the document hook that hosts construct from a
//! resolved connection descriptor. Application code uses this to inspect the
//! cluster and index documents.

use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::elasticsearch::ElasticsearchStore;
use crate::errors::HookError;
use crate::interfaces::DocumentStore;
use crate::types::ConnectionDescriptor;

/// Document hook over an Elasticsearch connection.
///
/// The hook is a thin facade: it derives a [`ClientConfig`] from the
/// descriptor once, owns the resulting store for its lifetime, and forwards
/// `info` and `add_doc` to it unchanged. The only local state is the current
/// index, seeded from the descriptor's default index and overwritten by
/// [`set_index`] and [`add_doc`].
///
/// Mutating operations take `&mut self`; callers sharing a hook across tasks
/// must serialize access or use separate instances.
///
/// # Example
///
/// ```no_run
/// use elastic_hook::{ConnectionDescriptor, ElasticHook};
/// use serde_json::json;
///
/// # async fn example() -> Result<(), elastic_hook::HookError> {
/// let descriptor = ConnectionDescriptor {
///     hosts: Some("es1,es2".to_string()),
///     port: Some("9200".to_string()),
///     default_index: Some("logs".to_string()),
///     ..Default::default()
/// };
/// let mut hook = ElasticHook::new(descriptor)?;
///
/// let cluster = hook.info().await?;
/// let response = hook.add_doc("logs", "_doc", json!({"message": "hello"})).await?;
/// # Ok(())
/// # }
/// ```
///
/// [`set_index`]: ElasticHook::set_index
/// [`add_doc`]: ElasticHook::add_doc
pub struct ElasticHook {
    store: Box<dyn DocumentStore>,
    current_index: Option<String>,
}

impl ElasticHook {
    /// Create a new hook from a resolved connection descriptor.
    ///
    /// Builds the client configuration, constructs the Elasticsearch store,
    /// and seeds the current index from the descriptor's default index.
    /// No network I/O happens here.
    ///
    /// # Arguments
    ///
    /// * `descriptor` - The resolved connection record
    ///
    /// # Returns
    ///
    /// * `Ok(ElasticHook)` - A new hook instance
    /// * `Err(HookError::InvalidConfig)` - If the descriptor cannot be mapped
    ///   onto a client configuration
    pub fn new(descriptor: ConnectionDescriptor) -> Result<Self, HookError> {
        let config = ClientConfig::from_descriptor(&descriptor)?;
        let store = ElasticsearchStore::from_config(&config)?;

        Ok(Self {
            store: Box::new(store),
            current_index: descriptor.default_index,
        })
    }

    /// Create a hook over an injected store implementation.
    ///
    /// Used to swap in alternative backends or recording mocks in tests.
    ///
    /// # Arguments
    ///
    /// * `store` - A boxed implementation of `DocumentStore`
    /// * `default_index` - Initial value for the current index
    pub fn with_store(store: Box<dyn DocumentStore>, default_index: Option<String>) -> Self {
        Self {
            store,
            current_index: default_index,
        }
    }

    /// The index targeted by the most recent `set_index`/`add_doc` call, or
    /// the descriptor's default index if neither has been called.
    pub fn current_index(&self) -> Option<&str> {
        self.current_index.as_deref()
    }

    /// Fetch cluster information.
    ///
    /// Delegates to the underlying store; errors are propagated unchanged.
    pub async fn info(&self) -> Result<Value, HookError> {
        self.store.info().await
    }

    /// Overwrite the current index.
    ///
    /// No validation; always succeeds.
    pub fn set_index(&mut self, index: impl Into<String>) {
        let index = index.into();
        debug!(index = %index, "Setting current index");
        self.current_index = Some(index);
    }

    /// Add a document to the given index.
    ///
    /// Sets the current index to `index` first (the mutation is observable
    /// after the call regardless of outcome), then delegates to the
    /// underlying store with exactly `(index, doc_type, doc)`. The backend's
    /// response body is returned verbatim and its errors are propagated
    /// unchanged; nothing is retried at this layer.
    ///
    /// # Arguments
    ///
    /// * `index` - The index to store the document in
    /// * `doc_type` - The document type path segment
    /// * `doc` - The document body
    pub async fn add_doc(
        &mut self,
        index: &str,
        doc_type: &str,
        doc: Value,
    ) -> Result<Value, HookError> {
        self.set_index(index);
        self.store.index_document(index, doc_type, &doc).await
    }
}
