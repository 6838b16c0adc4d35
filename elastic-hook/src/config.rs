//! Client configuration derived from connection descriptors.

use crate::errors::HookError;
use crate::types::ConnectionDescriptor;

/// Configuration for the underlying Elasticsearch client.
///
/// Derived deterministically from a [`ConnectionDescriptor`] by
/// [`ClientConfig::from_descriptor`]. Invariants:
///
/// - `basic_auth` is present if and only if the descriptor's username was
///   non-empty.
/// - `port` is present if and only if the descriptor supplied a port.
/// - `hosts` is the comma-split of the descriptor's host string, or empty if
///   that string was absent or empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientConfig {
    /// Node hosts in descriptor order. Segments are kept verbatim, including
    /// empty ones produced by a stray comma.
    pub hosts: Vec<String>,
    /// Port applied to nodes that do not carry an explicit one.
    pub port: Option<u16>,
    /// `(username, password)` pair for basic authentication. The password may
    /// be empty; it is passed through uninterpreted.
    pub basic_auth: Option<(String, String)>,
}

impl ClientConfig {
    /// Map a connection descriptor onto a client configuration.
    ///
    /// Pure and side-effect free; absent descriptor fields simply produce
    /// absent config fields. The only failure is a present port that does not
    /// parse as an integer.
    ///
    /// # Arguments
    ///
    /// * `descriptor` - The resolved connection record
    ///
    /// # Returns
    ///
    /// * `Ok(ClientConfig)` - The derived configuration
    /// * `Err(HookError::InvalidConfig)` - If the port is non-numeric
    pub fn from_descriptor(descriptor: &ConnectionDescriptor) -> Result<Self, HookError> {
        let hosts = match descriptor.hosts.as_deref() {
            Some(raw) if !raw.is_empty() => raw.split(',').map(str::to_string).collect(),
            _ => Vec::new(),
        };

        let port = match descriptor.port.as_deref() {
            Some(raw) => Some(raw.parse::<u16>().map_err(|e| {
                HookError::invalid_config(format!("port {:?} is not a valid integer: {}", raw, e))
            })?),
            None => None,
        };

        let basic_auth = match descriptor.username.as_deref() {
            Some(username) if !username.is_empty() => Some((
                username.to_string(),
                descriptor.password.clone().unwrap_or_default(),
            )),
            _ => None,
        };

        Ok(Self {
            hosts,
            port,
            basic_auth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosts_comma_split_preserves_order() {
        let descriptor = ConnectionDescriptor {
            hosts: Some("a,b,c".to_string()),
            ..Default::default()
        };

        let config = ClientConfig::from_descriptor(&descriptor).unwrap();
        assert_eq!(config.hosts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_hosts_absent_yields_empty_list() {
        let config = ClientConfig::from_descriptor(&ConnectionDescriptor::default()).unwrap();
        assert!(config.hosts.is_empty());
    }

    #[test]
    fn test_hosts_empty_string_yields_empty_list() {
        let descriptor = ConnectionDescriptor {
            hosts: Some(String::new()),
            ..Default::default()
        };

        let config = ClientConfig::from_descriptor(&descriptor).unwrap();
        assert!(config.hosts.is_empty());
        assert_eq!(config.port, None);
        assert_eq!(config.basic_auth, None);
    }

    #[test]
    fn test_hosts_empty_segments_kept_verbatim() {
        let descriptor = ConnectionDescriptor {
            hosts: Some("a,,b".to_string()),
            ..Default::default()
        };

        let config = ClientConfig::from_descriptor(&descriptor).unwrap();
        assert_eq!(config.hosts, vec!["a", "", "b"]);
    }

    #[test]
    fn test_port_parsed_when_present() {
        let descriptor = ConnectionDescriptor {
            port: Some("9200".to_string()),
            ..Default::default()
        };

        let config = ClientConfig::from_descriptor(&descriptor).unwrap();
        assert_eq!(config.port, Some(9200));
    }

    #[test]
    fn test_non_numeric_port_is_invalid_config() {
        let descriptor = ConnectionDescriptor {
            port: Some("abc".to_string()),
            ..Default::default()
        };

        let result = ClientConfig::from_descriptor(&descriptor);
        assert!(matches!(result, Err(HookError::InvalidConfig(_))));
    }

    #[test]
    fn test_basic_auth_present_iff_username_non_empty() {
        let descriptor = ConnectionDescriptor {
            username: Some("u".to_string()),
            password: Some("p".to_string()),
            ..Default::default()
        };
        let config = ClientConfig::from_descriptor(&descriptor).unwrap();
        assert_eq!(config.basic_auth, Some(("u".to_string(), "p".to_string())));

        let descriptor = ConnectionDescriptor {
            username: Some(String::new()),
            password: Some("p".to_string()),
            ..Default::default()
        };
        let config = ClientConfig::from_descriptor(&descriptor).unwrap();
        assert_eq!(config.basic_auth, None);
    }

    #[test]
    fn test_basic_auth_password_defaults_to_empty_string() {
        let descriptor = ConnectionDescriptor {
            username: Some("u".to_string()),
            ..Default::default()
        };

        let config = ClientConfig::from_descriptor(&descriptor).unwrap();
        assert_eq!(config.basic_auth, Some(("u".to_string(), String::new())));
    }

    #[test]
    fn test_full_descriptor_mapping() {
        let descriptor = ConnectionDescriptor {
            hosts: Some("es1,es2".to_string()),
            port: Some("9200".to_string()),
            username: Some("u".to_string()),
            password: Some("p".to_string()),
            default_index: Some("logs".to_string()),
        };

        let config = ClientConfig::from_descriptor(&descriptor).unwrap();
        assert_eq!(config.hosts, vec!["es1", "es2"]);
        assert_eq!(config.port, Some(9200));
        assert_eq!(config.basic_auth, Some(("u".to_string(), "p".to_string())));
    }
}
