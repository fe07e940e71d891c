//! The field exposure table.

use crate::rule::FieldExposureRule;
use metagate_types::Identity;
use std::collections::HashMap;

/// Allow-list of REST-addressable metadata fields.
///
/// Built once during startup, then shared read-only with the request path.
/// Lookups for unregistered fields are routine, not exceptional: `resolve`
/// returns `None` and `authorize_write` returns `false` (default-deny).
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    // Nested by entity type so per-request lookups borrow their keys
    // instead of building an owned tuple.
    rules: HashMap<String, HashMap<String, FieldExposureRule>>,
}

impl FieldRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the rule for `(entity_type, field_id)`.
    ///
    /// Registering the same pair twice replaces the prior rule (last write
    /// wins) and never produces duplicate bindings.
    pub fn register(&mut self, rule: FieldExposureRule) {
        self.rules
            .entry(rule.entity_type.clone())
            .or_default()
            .insert(rule.field_id.clone(), rule);
    }

    /// Looks up the rule for an entity/field pair.
    #[must_use]
    pub fn resolve(&self, entity_type: &str, field_id: &str) -> Option<&FieldExposureRule> {
        self.rules
            .get(entity_type)
            .and_then(|fields| fields.get(field_id))
    }

    /// Whether a write to this field is permitted for the given identity.
    ///
    /// `false` when the field is unregistered, else the rule's policy
    /// decision. Never errors; the REST layer maps `false` to a permission
    /// response.
    #[must_use]
    pub fn authorize_write(&self, entity_type: &str, field_id: &str, identity: &Identity) -> bool {
        match self.resolve(entity_type, field_id) {
            Some(rule) => rule.policy.decide(identity),
            None => false,
        }
    }

    /// Whether the field appears in REST payloads at all.
    #[must_use]
    pub fn is_visible(&self, entity_type: &str, field_id: &str) -> bool {
        self.resolve(entity_type, field_id)
            .is_some_and(|rule| rule.visible)
    }

    /// Iterates the visible rules for one entity type, for payload shaping
    /// and the discovery endpoint. Order is unspecified.
    pub fn visible_fields<'a>(
        &'a self,
        entity_type: &'a str,
    ) -> impl Iterator<Item = &'a FieldExposureRule> {
        self.rules
            .get(entity_type)
            .into_iter()
            .flat_map(|fields| fields.values())
            .filter(|rule| rule.visible)
    }

    /// Number of registered rules across all entity types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.values().map(HashMap::len).sum()
    }

    /// Whether no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
