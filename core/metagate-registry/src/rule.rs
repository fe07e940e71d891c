//! Exposure rules for individual metadata fields.

use crate::policy::WritePolicy;
use metagate_types::{Cardinality, ValueType};
use serde::{Deserialize, Serialize};

/// Declares how one internal metadata field is exposed over REST.
///
/// Visibility and write authorization are independent axes: `visible`
/// controls whether the field appears in payloads at all, `policy` is only
/// consulted when a write is attempted. Both must pass for a write to be
/// externally observable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldExposureRule {
    /// The content entity kind this rule applies to (e.g. "post").
    pub entity_type: String,
    /// The internal metadata key. Opaque; only uniqueness matters.
    pub field_id: String,
    /// Whether the field is included in REST read/write payloads.
    pub visible: bool,
    /// Single value or a collection.
    pub cardinality: Cardinality,
    /// Primitive type tag used for payload validation.
    pub value_type: ValueType,
    /// Write-time authorization predicate.
    pub policy: WritePolicy,
}

impl FieldExposureRule {
    /// A visible, single-valued string field — the shape every field in the
    /// shipped SEO set has.
    #[must_use]
    pub fn single_string(
        entity_type: impl Into<String>,
        field_id: impl Into<String>,
        policy: WritePolicy,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            field_id: field_id.into(),
            visible: true,
            cardinality: Cardinality::Single,
            value_type: ValueType::String,
            policy,
        }
    }

    /// Returns a copy of this rule with visibility turned off.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}
