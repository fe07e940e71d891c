//! The shipped field set: Yoast-style SEO metadata on posts.
//!
//! Four single-valued string fields on entity type `post`, each writable by
//! any identity holding `edit_posts`. This is the production registration;
//! a deployment can replace it with a `fields.toml` manifest.

use crate::policy::WritePolicy;
use crate::registry::FieldRegistry;
use crate::rule::FieldExposureRule;

/// The capability gating every field in the shipped set.
pub const EDIT_POSTS: &str = "edit_posts";

const SEO_FIELD_IDS: [&str; 4] = [
    "seo_title",
    "seo_meta_description",
    "seo_focus_keyword",
    "seo_canonical_url",
];

/// Registers the SEO field set into an existing registry.
///
/// Idempotent: registering over an already-populated registry replaces the
/// same four rules.
pub fn register_seo_fields(registry: &mut FieldRegistry) {
    for field_id in SEO_FIELD_IDS {
        registry.register(FieldExposureRule::single_string(
            "post",
            field_id,
            WritePolicy::capability(EDIT_POSTS),
        ));
    }
}

/// Builds a registry holding only the shipped SEO field set.
#[must_use]
pub fn builtin_registry() -> FieldRegistry {
    let mut registry = FieldRegistry::new();
    register_seo_fields(&mut registry);
    registry
}
