//! Elasticsearch store implementation.
//!
//! This module provides the concrete implementation of `DocumentStore`
//! using the Elasticsearch Rust crate.

use async_trait::async_trait;
use elasticsearch::auth::Credentials;
use elasticsearch::http::headers::HeaderMap;
use elasticsearch::http::request::JsonBody;
use elasticsearch::http::transport::{
    MultiNodeConnectionPool, SingleNodeConnectionPool, TransportBuilder,
};
use elasticsearch::http::Method;
use elasticsearch::Elasticsearch;
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::config::ClientConfig;
use crate::errors::HookError;
use crate::interfaces::DocumentStore;

/// Node used when the configuration carries no hosts, matching the wrapped
/// client's own default.
const DEFAULT_NODE_URL: &str = "http://localhost:9200";

/// Elasticsearch-backed document store.
///
/// Construction is synchronous and performs no network I/O; the first request
/// goes out on the first operation. Connection pooling, TLS, and timeouts are
/// the wrapped client's concern and are not re-exposed here beyond
/// host/port/auth.
///
/// # Example
///
/// ```ignore
/// use elastic_hook::{ClientConfig, ConnectionDescriptor, ElasticsearchStore};
///
/// let descriptor = ConnectionDescriptor {
///     hosts: Some("es1,es2".to_string()),
///     port: Some("9200".to_string()),
///     ..Default::default()
/// };
/// let config = ClientConfig::from_descriptor(&descriptor)?;
/// let store = ElasticsearchStore::from_config(&config)?;
/// let cluster = store.info().await?;
/// ```
pub struct ElasticsearchStore {
    client: Elasticsearch,
}

impl ElasticsearchStore {
    /// Create a new store from a derived client configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The configuration derived from a connection descriptor
    ///
    /// # Returns
    ///
    /// * `Ok(ElasticsearchStore)` - A new store instance
    /// * `Err(HookError::InvalidConfig)` - If a host cannot be parsed into a
    ///   node URL or the transport cannot be built
    pub fn from_config(config: &ClientConfig) -> Result<Self, HookError> {
        let mut urls = Self::node_urls(config)?;

        info!(
            nodes = ?urls.iter().map(Url::as_str).collect::<Vec<_>>(),
            authenticated = config.basic_auth.is_some(),
            "Creating Elasticsearch store"
        );

        let mut builder = if urls.len() == 1 {
            TransportBuilder::new(SingleNodeConnectionPool::new(urls.remove(0)))
        } else {
            TransportBuilder::new(MultiNodeConnectionPool::round_robin(urls, None))
        };
        builder = builder.disable_proxy();

        if let Some((username, password)) = &config.basic_auth {
            builder = builder.auth(Credentials::Basic(username.clone(), password.clone()));
        }

        let transport = builder
            .build()
            .map_err(|e| HookError::invalid_config(format!("Failed to build transport: {}", e)))?;

        Ok(Self {
            client: Elasticsearch::new(transport),
        })
    }

    /// Derive the node URLs for the connection pool.
    ///
    /// Scheme-less hosts get `http://`; the config port applies to every node
    /// that does not carry an explicit port; an empty host list falls back to
    /// the default node.
    fn node_urls(config: &ClientConfig) -> Result<Vec<Url>, HookError> {
        if config.hosts.is_empty() {
            let mut url = Url::parse(DEFAULT_NODE_URL)
                .map_err(|e| HookError::invalid_config(e.to_string()))?;
            Self::apply_port(&mut url, config.port)?;
            return Ok(vec![url]);
        }

        config
            .hosts
            .iter()
            .map(|host| {
                let raw = if host.contains("://") {
                    host.clone()
                } else {
                    format!("http://{}", host)
                };
                let mut url = Url::parse(&raw).map_err(|e| {
                    HookError::invalid_config(format!("Invalid host {:?}: {}", host, e))
                })?;
                Self::apply_port(&mut url, config.port)?;
                Ok(url)
            })
            .collect()
    }

    /// Set the configured port on a node URL unless the host already carries
    /// an explicit one.
    fn apply_port(url: &mut Url, port: Option<u16>) -> Result<(), HookError> {
        if let Some(port) = port {
            if url.port().is_none() {
                url.set_port(Some(port)).map_err(|_| {
                    HookError::invalid_config(format!("Cannot set port on {}", url))
                })?;
            }
        }
        Ok(())
    }

    /// Read a response body as JSON, surfacing non-success statuses as errors.
    async fn read_response(
        response: elasticsearch::http::response::Response,
        operation: &str,
    ) -> Result<Value, HookError> {
        let status = response.status_code();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, operation = operation, "Request failed");
            return Err(HookError::upstream(format!(
                "{} failed with status {}: {}",
                operation, status, body
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| HookError::upstream(e.to_string()))
    }
}

#[async_trait]
impl DocumentStore for ElasticsearchStore {
    async fn info(&self) -> Result<Value, HookError> {
        let response = self
            .client
            .info()
            .send()
            .await
            .map_err(|e| HookError::upstream(e.to_string()))?;

        Self::read_response(response, "Info request").await
    }

    async fn index_document(
        &self,
        index: &str,
        doc_type: &str,
        body: &Value,
    ) -> Result<Value, HookError> {
        // The type goes on the wire as a path segment so the delegation stays
        // exactly (index, doc_type, body).
        let path = format!("/{}/{}", index, doc_type);

        let response = self
            .client
            .transport()
            .send(
                Method::Post,
                &path,
                HeaderMap::new(),
                Option::<&()>::None,
                Some(JsonBody::new(body.clone())),
                None,
            )
            .await
            .map_err(|e| HookError::upstream(e.to_string()))?;

        let result = Self::read_response(response, "Index request").await?;
        debug!(index = %index, doc_type = %doc_type, "Document indexed");
        Ok(result)
    }
}
