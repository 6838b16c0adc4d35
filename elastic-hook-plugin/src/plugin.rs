//! Plugin registration surface.
//!
//! Hosts discover the hook through an explicit descriptor object enumerated
//! at startup; nothing registers itself implicitly at load time.

use elastic_hook::{ConnectionDescriptor, ElasticHook, HookError};
use tracing::info;

use crate::registry::ConnectionRegistry;

/// Name the plugin registers under.
pub const PLUGIN_NAME: &str = "elastic";

/// Connection identifier used when a host does not specify one.
pub const DEFAULT_CONN_ID: &str = "elastic_default";

/// Factory that builds a hook from a resolved connection descriptor.
pub type HookFactory = fn(ConnectionDescriptor) -> Result<ElasticHook, HookError>;

/// A constructible hook exposed by the plugin.
#[derive(Debug, Clone)]
pub struct HookSpec {
    /// Name the host lists the hook under.
    pub name: &'static str,
    /// Constructor invoked with a resolved descriptor.
    pub build: HookFactory,
}

/// Plugin record a host registry enumerates at startup.
#[derive(Debug, Clone)]
pub struct PluginDescriptor {
    /// The plugin's registered name.
    pub name: &'static str,
    /// The hooks this plugin can construct.
    pub hooks: Vec<HookSpec>,
}

/// The plugin descriptor for this crate: one plugin, one constructible hook.
pub fn plugin_descriptor() -> PluginDescriptor {
    PluginDescriptor {
        name: PLUGIN_NAME,
        hooks: vec![HookSpec {
            name: PLUGIN_NAME,
            build: ElasticHook::new,
        }],
    }
}

/// Resolve a connection identifier and build a hook from it.
///
/// Convenience for hosts that go straight from identifier to hook. Resolution
/// failures (`ConnectionNotFound`) and configuration failures
/// (`InvalidConfig`) abort construction; neither is retried.
///
/// # Arguments
///
/// * `registry` - The host's connection registry
/// * `conn_id` - The connection identifier to resolve
pub fn build_hook(
    registry: &dyn ConnectionRegistry,
    conn_id: &str,
) -> Result<ElasticHook, HookError> {
    let descriptor = registry.resolve(conn_id)?;
    info!(conn_id = %conn_id, "Building Elasticsearch hook");
    ElasticHook::new(descriptor)
}
