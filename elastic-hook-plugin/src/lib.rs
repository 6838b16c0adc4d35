//! # Elastic Hook Plugin
//!
//! Host-facing surface for the Elasticsearch hook: connection registries that
//! resolve identifiers to descriptors, and the plugin descriptor a
//! workflow-orchestration host enumerates at startup to discover the hook.
//!
//! The core crate takes an already-resolved [`ConnectionDescriptor`]; this
//! crate owns the lookup side of that boundary.
//!
//! [`ConnectionDescriptor`]: elastic_hook::ConnectionDescriptor

pub mod plugin;
pub mod registry;

pub use plugin::{
    build_hook, plugin_descriptor, HookSpec, PluginDescriptor, DEFAULT_CONN_ID, PLUGIN_NAME,
};
pub use registry::{ConnectionRegistry, EnvConnectionRegistry, InMemoryConnectionRegistry};
