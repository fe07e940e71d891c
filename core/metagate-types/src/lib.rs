//! Core type definitions for MetaGate.
//!
//! This crate defines the fundamental, host-agnostic types shared by the
//! field exposure registry and the REST gateway:
//! - Request identities and the capabilities they hold
//! - Metadata values and their type/cardinality tags
//!
//! Everything host-specific (routing, storage, token handling) belongs in
//! the gateway, not here.

mod identity;
mod value;

pub use identity::{Capability, Identity};
pub use value::{Cardinality, MetaValue, ValueType};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("value does not match declared shape: {0}")]
    ValueShape(String),
}
