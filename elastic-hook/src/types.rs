//! Connection descriptor types.
//!
//! This module defines the raw connection record shape produced by a
//! connection registry and consumed when building a hook.

use serde::{Deserialize, Serialize};

/// Raw connection record describing how to reach an Elasticsearch deployment.
///
/// A registry resolves a connection identifier to one of these. Every field is
/// optional because connection records are free-form: a descriptor with no
/// hosts is valid and falls back to the client's default node. Fields are kept
/// as the registry supplied them - `hosts` is a single comma-separated string
/// and `port` is unparsed - so that interpretation (splitting, integer
/// parsing) happens in exactly one place, [`ClientConfig::from_descriptor`].
///
/// [`ClientConfig::from_descriptor`]: crate::config::ClientConfig::from_descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionDescriptor {
    /// Comma-separated host string, e.g. `"es1,es2:9201"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<String>,
    /// Port as supplied by the registry, unparsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// Username for basic authentication. An empty or absent username means
    /// the connection is unauthenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Password paired with `username`. Opaque; passed through uninterpreted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Default index for hooks built from this connection (the connection
    /// record's schema field).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_index: Option<String>,
}
