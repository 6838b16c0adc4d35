//! Document store trait definition.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::HookError;

/// Abstracts the underlying document store client.
///
/// The hook delegates every network operation to an implementation of this
/// trait. The concrete implementation wraps the Elasticsearch client; tests
/// inject recording mocks. Operations are direct one-call delegations: the
/// store does not retry, batch, or reinterpret responses, and it returns the
/// backend's response body verbatim.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch cluster information from the backend.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The backend's info response body
    /// * `Err(HookError::UpstreamError)` - If the call fails
    async fn info(&self) -> Result<Value, HookError>;

    /// Index a single document.
    ///
    /// # Arguments
    ///
    /// * `index` - The target index name
    /// * `doc_type` - The document type path segment
    /// * `body` - The document body
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The backend's index response body
    /// * `Err(HookError::UpstreamError)` - If the call fails
    async fn index_document(
        &self,
        index: &str,
        doc_type: &str,
        body: &Value,
    ) -> Result<Value, HookError>;
}
