//! # Elastic Hook
//!
//! This crate maps host-supplied connection descriptors onto a configured
//! Elasticsearch client and exposes a thin document hook over it. It includes
//! definitions for errors, the document store interface, and a concrete
//! implementation backed by the Elasticsearch client.

pub mod config;
pub mod elasticsearch;
pub mod errors;
pub mod hook;
pub mod interfaces;
pub mod types;

pub use config::ClientConfig;
pub use elasticsearch::ElasticsearchStore;
pub use errors::HookError;
pub use hook::ElasticHook;
pub use interfaces::DocumentStore;
pub use types::ConnectionDescriptor;
