//! Request identity and capability types.
//!
//! A capability is a named permission the host platform has granted to an
//! identity (e.g. `edit_posts`). MetaGate never issues capabilities itself;
//! it only checks membership when a write is authorized.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A named permission an identity may hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(String);

impl Capability {
    /// Creates a capability from its host-side name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the host-side capability name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Capability {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// An authenticated caller, as resolved by the host's credential mechanism.
///
/// How the token maps to an identity is the gateway's concern; the registry
/// only ever asks which capabilities the identity holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    name: String,
    capabilities: HashSet<Capability>,
}

impl Identity {
    /// Creates an identity with the given capability set.
    #[must_use]
    pub fn new(name: impl Into<String>, capabilities: impl IntoIterator<Item = Capability>) -> Self {
        Self {
            name: name.into(),
            capabilities: capabilities.into_iter().collect(),
        }
    }

    /// Creates an identity holding no capabilities at all.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            name: "anonymous".to_string(),
            capabilities: HashSet::new(),
        }
    }

    /// Returns the identity's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this identity holds the given capability.
    #[must_use]
    pub fn has_capability(&self, capability: &Capability) -> bool {
        self.capabilities.contains(capability)
    }

    /// Returns all capabilities held by this identity.
    #[must_use]
    pub fn capabilities(&self) -> &HashSet<Capability> {
        &self.capabilities
    }
}
