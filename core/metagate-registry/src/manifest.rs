//! Optional TOML manifest declaring the exposed field set.
//!
//! A deployment can override the built-in SEO registration with a
//! `fields.toml`:
//!
//! ```toml
//! [[field]]
//! entity-type = "post"
//! id = "seo_title"
//! requires = "edit_posts"
//!
//! [[field]]
//! entity-type = "post"
//! id = "seo_keywords"
//! cardinality = "multiple"
//! requires = { any = ["edit_posts", "manage_options"] }
//! ```
//!
//! A missing file means the built-in set; a malformed file falls back to
//! the built-in set with a warning, never aborting startup. A broken
//! manifest affects only the deployment's extra fields, not the process.

use crate::error::RegistryError;
use crate::policy::WritePolicy;
use crate::registry::FieldRegistry;
use crate::rule::FieldExposureRule;
use crate::seo;
use metagate_types::{Cardinality, ValueType};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// Parsed field manifest, convertible into a [`FieldRegistry`].
#[derive(Debug, Deserialize)]
pub struct RegistryManifest {
    #[serde(default, rename = "field")]
    fields: Vec<FieldDecl>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct FieldDecl {
    entity_type: String,
    id: String,
    #[serde(default = "default_visible")]
    visible: bool,
    #[serde(default)]
    cardinality: Cardinality,
    #[serde(default = "default_value_type", rename = "type")]
    value_type: ValueType,
    requires: RequiresDecl,
}

fn default_visible() -> bool {
    true
}

fn default_value_type() -> ValueType {
    ValueType::String
}

/// The `requires` key: a bare capability name, or a composed form.
#[derive(Debug, Deserialize)]
#[serde(untagged, rename_all = "kebab-case")]
enum RequiresDecl {
    Capability(String),
    Composed(ComposedRequires),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ComposedRequires {
    Any(Vec<String>),
    All(Vec<String>),
}

impl RequiresDecl {
    fn into_policy(self) -> WritePolicy {
        match self {
            Self::Capability(name) => WritePolicy::capability(name),
            Self::Composed(ComposedRequires::Any(names)) => {
                WritePolicy::Any(names.into_iter().map(WritePolicy::capability).collect())
            }
            Self::Composed(ComposedRequires::All(names)) => {
                WritePolicy::All(names.into_iter().map(WritePolicy::capability).collect())
            }
        }
    }
}

impl RegistryManifest {
    /// Parses a manifest from TOML text.
    pub fn parse(contents: &str) -> Result<Self, RegistryError> {
        Ok(toml::from_str(contents)?)
    }

    /// Number of declared fields.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Builds a registry from the declared fields. Duplicate declarations
    /// follow the registry's last-write-wins semantics.
    #[must_use]
    pub fn into_registry(self) -> FieldRegistry {
        let mut registry = FieldRegistry::new();
        for decl in self.fields {
            registry.register(FieldExposureRule {
                entity_type: decl.entity_type,
                field_id: decl.id,
                visible: decl.visible,
                cardinality: decl.cardinality,
                value_type: decl.value_type,
                policy: decl.requires.into_policy(),
            });
        }
        registry
    }

    /// Loads a registry from `path`, falling back to the built-in SEO set
    /// when the file is absent or unreadable.
    #[must_use]
    pub fn load_or_builtin(path: &Path) -> FieldRegistry {
        if !path.exists() {
            info!("No field manifest at {:?}, using built-in SEO field set", path);
            return seo::builtin_registry();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(manifest) => {
                    info!(
                        "Loaded field manifest from {:?} ({} fields)",
                        path,
                        manifest.field_count()
                    );
                    manifest.into_registry()
                }
                Err(e) => {
                    warn!(
                        "Failed to parse field manifest {:?}: {}. Using built-in SEO field set.",
                        path, e
                    );
                    seo::builtin_registry()
                }
            },
            Err(e) => {
                warn!(
                    "Failed to read field manifest {:?}: {}. Using built-in SEO field set.",
                    path, e
                );
                seo::builtin_registry()
            }
        }
    }
}
