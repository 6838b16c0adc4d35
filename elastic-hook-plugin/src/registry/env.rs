//! Environment-variable connection registry.

use std::env;

use elastic_hook::{ConnectionDescriptor, HookError};
use tracing::debug;

use crate::registry::ConnectionRegistry;

/// Registry that reads connection records from environment variables.
///
/// A connection identifier maps to a variable prefix: the identifier is
/// uppercased and every non-alphanumeric character becomes `_`. The record's
/// fields are then read from `{PREFIX}_HOSTS`, `{PREFIX}_PORT`,
/// `{PREFIX}_USERNAME`, `{PREFIX}_PASSWORD`, and `{PREFIX}_SCHEMA` (the
/// default index). For `elastic_default`:
///
/// ```text
/// ELASTIC_DEFAULT_HOSTS=es1,es2
/// ELASTIC_DEFAULT_PORT=9200
/// ELASTIC_DEFAULT_USERNAME=indexer
/// ELASTIC_DEFAULT_PASSWORD=secret
/// ELASTIC_DEFAULT_SCHEMA=logs
/// ```
///
/// A connection with none of its variables set is not found. Variables that
/// are set but empty are kept as empty strings, so an empty `_HOSTS` yields a
/// descriptor with an empty host string.
#[derive(Debug, Clone, Default)]
pub struct EnvConnectionRegistry;

impl EnvConnectionRegistry {
    /// Create a new environment-backed registry.
    pub fn new() -> Self {
        Self
    }

    /// Variable prefix for a connection identifier.
    fn var_prefix(conn_id: &str) -> String {
        conn_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect()
    }

    fn field(prefix: &str, field: &str) -> Option<String> {
        env::var(format!("{}_{}", prefix, field)).ok()
    }
}

impl ConnectionRegistry for EnvConnectionRegistry {
    fn resolve(&self, conn_id: &str) -> Result<ConnectionDescriptor, HookError> {
        let prefix = Self::var_prefix(conn_id);

        let descriptor = ConnectionDescriptor {
            hosts: Self::field(&prefix, "HOSTS"),
            port: Self::field(&prefix, "PORT"),
            username: Self::field(&prefix, "USERNAME"),
            password: Self::field(&prefix, "PASSWORD"),
            default_index: Self::field(&prefix, "SCHEMA"),
        };

        if descriptor == ConnectionDescriptor::default() {
            return Err(HookError::connection_not_found(conn_id));
        }

        debug!(conn_id = %conn_id, prefix = %prefix, "Resolved connection from environment");
        Ok(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_prefix() {
        assert_eq!(
            EnvConnectionRegistry::var_prefix("elastic_default"),
            "ELASTIC_DEFAULT"
        );
        assert_eq!(
            EnvConnectionRegistry::var_prefix("elastic-staging.eu"),
            "ELASTIC_STAGING_EU"
        );
    }

    #[test]
    fn test_resolve_full_record() {
        env::set_var("ENV_REG_FULL_HOSTS", "es1,es2");
        env::set_var("ENV_REG_FULL_PORT", "9200");
        env::set_var("ENV_REG_FULL_USERNAME", "u");
        env::set_var("ENV_REG_FULL_PASSWORD", "p");
        env::set_var("ENV_REG_FULL_SCHEMA", "logs");

        let descriptor = EnvConnectionRegistry::new().resolve("env_reg_full").unwrap();
        assert_eq!(descriptor.hosts.as_deref(), Some("es1,es2"));
        assert_eq!(descriptor.port.as_deref(), Some("9200"));
        assert_eq!(descriptor.username.as_deref(), Some("u"));
        assert_eq!(descriptor.password.as_deref(), Some("p"));
        assert_eq!(descriptor.default_index.as_deref(), Some("logs"));
    }

    #[test]
    fn test_resolve_partial_record() {
        env::set_var("ENV_REG_PARTIAL_HOSTS", "es1");

        let descriptor = EnvConnectionRegistry::new()
            .resolve("env_reg_partial")
            .unwrap();
        assert_eq!(descriptor.hosts.as_deref(), Some("es1"));
        assert_eq!(descriptor.port, None);
        assert_eq!(descriptor.username, None);
    }

    #[test]
    fn test_resolve_unset_connection_is_not_found() {
        let result = EnvConnectionRegistry::new().resolve("env_reg_unset");
        assert!(matches!(result, Err(HookError::ConnectionNotFound(id)) if id == "env_reg_unset"));
    }

    #[test]
    fn test_resolve_empty_hosts_variable_is_kept() {
        env::set_var("ENV_REG_EMPTY_HOSTS", "");

        let descriptor = EnvConnectionRegistry::new()
            .resolve("env_reg_empty")
            .unwrap();
        assert_eq!(descriptor.hosts.as_deref(), Some(""));
    }
}
