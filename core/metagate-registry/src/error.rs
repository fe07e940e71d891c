//! Error types for the registry crate.
//!
//! Lookups never error — unregistered fields are routine sentinel results.
//! Only building a registry from declarative input can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("manifest parse error: {0}")]
    ManifestParse(#[from] toml::de::Error),
}
