//! Error types for the hook crates.
//!
//! This module provides a unified error type for connection resolution,
//! configuration, and document store operations.

mod hook_error;

pub use hook_error::HookError;
