//! Elasticsearch implementation of the document store.
//!
//! This module provides a concrete implementation of `DocumentStore`
//! using the Elasticsearch Rust client.

mod store;

pub use store::ElasticsearchStore;
