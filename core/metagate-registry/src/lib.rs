//! Field exposure registry for MetaGate.
//!
//! The registry is a strict allow-list mapping `(entity type, field id)`
//! pairs to exposure rules. A field that is not registered is neither
//! visible in REST payloads nor writable, regardless of who asks.
//!
//! The registry is populated once during startup, wrapped in an `Arc`, and
//! handed to the REST layer. After that it is read-only, so concurrent
//! request handlers query it without locks.

mod error;
mod manifest;
mod policy;
mod registry;
mod rule;
mod seo;

pub use error::RegistryError;
pub use manifest::RegistryManifest;
pub use policy::WritePolicy;
pub use registry::FieldRegistry;
pub use rule::FieldExposureRule;
pub use seo::{builtin_registry, register_seo_fields, EDIT_POSTS};
