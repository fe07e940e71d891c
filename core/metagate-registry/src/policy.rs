//! Write authorization policies.
//!
//! A policy is a pure predicate over the request identity, evaluated at
//! write time. Evaluating a policy twice for the same identity (once for
//! validation, once for commit) must give the same answer.

use metagate_types::{Capability, Identity};
use serde::{Deserialize, Serialize};

/// Predicate deciding whether an identity may write a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WritePolicy {
    /// Permit when the identity holds the named capability.
    HasCapability(Capability),
    /// Permit when at least one sub-policy permits.
    Any(Vec<WritePolicy>),
    /// Permit when every sub-policy permits. `All([])` is vacuously true.
    All(Vec<WritePolicy>),
}

impl WritePolicy {
    /// Convenience constructor for the common single-capability case.
    #[must_use]
    pub fn capability(name: impl Into<String>) -> Self {
        Self::HasCapability(Capability::new(name))
    }

    /// Evaluates the policy against an identity. Pure, no I/O.
    #[must_use]
    pub fn decide(&self, identity: &Identity) -> bool {
        match self {
            Self::HasCapability(cap) => identity.has_capability(cap),
            Self::Any(policies) => policies.iter().any(|p| p.decide(identity)),
            Self::All(policies) => policies.iter().all(|p| p.decide(identity)),
        }
    }
}
