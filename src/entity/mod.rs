use std::fmt;

use serde::Deserialize;

use crate::validation::ValidationError;

mod naming;

pub use naming::{
    default_subscription_name, derive_names, topic_path, DerivedNames, DEAD_LETTER_SUFFIX,
    DEFAULT_SUBSCRIPTION_SUFFIX,
};

/// Entity configuration: a scope (messaging namespace, e.g. a cloud
/// project) plus a short logical entity name, with the fully-qualified
/// resource names derived from them.
///
/// Derived names are recomputed on every write of `scope` or
/// `entity_name` and are never independently assignable, so they are
/// always consistent with the current inputs.
///
/// Not designed for concurrent mutation; callers sharing a config across
/// threads must serialize writes externally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "EntityConfigDe")]
pub struct EntityConfig {
    scope: String,
    entity_name: String,
    names: DerivedNames,
}

impl EntityConfig {
    /// Create an empty entity config
    pub fn new() -> Self {
        Self {
            scope: String::new(),
            entity_name: String::new(),
            names: derive_names("", ""),
        }
    }

    /// The messaging namespace identifier
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Set the scope and re-derive the resource names
    pub fn set_scope(&mut self, scope: &str) {
        self.scope = scope.to_string();
        self.refresh();
    }

    /// The short logical entity name
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Set the entity name and re-derive the resource names
    pub fn set_entity_name(&mut self, entity_name: &str) {
        self.entity_name = entity_name.to_string();
        self.refresh();
    }

    /// Fully-qualified topic path: projects/{scope}/topics/{entity}
    pub fn topic_path(&self) -> &str {
        &self.names.topic_path
    }

    /// Dead-letter entity name, if this entity has one
    pub fn dead_letter_entity_name(&self) -> Option<&str> {
        self.names.dead_letter_entity_name.as_deref()
    }

    /// Fully-qualified dead-letter topic path, if this entity has one
    pub fn dead_letter_topic_path(&self) -> Option<&str> {
        self.names.dead_letter_topic_path.as_deref()
    }

    fn refresh(&mut self) {
        self.names = derive_names(&self.scope, &self.entity_name);
    }

    /// Validate the entity config on its own.
    ///
    /// Only `entity_name` is required here; the scope may legitimately be
    /// populated later by a parent config, so receiver/sender configs
    /// enforce it instead.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.entity_name.is_empty() {
            return Err(ValidationError::required("entity_name"));
        }
        Ok(())
    }
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entity: {}, dead-letter entity: {}",
            self.entity_name,
            self.dead_letter_entity_name().unwrap_or("[not set]")
        )
    }
}

/// Plain shape for deserialization; conversion runs the setters so the
/// derived names are consistent for deserialized configs too.
#[derive(Deserialize, Default)]
#[serde(default)]
struct EntityConfigDe {
    scope: String,
    entity_name: String,
}

impl From<EntityConfigDe> for EntityConfig {
    fn from(de: EntityConfigDe) -> Self {
        let mut config = EntityConfig::new();
        config.set_entity_name(&de.entity_name);
        config.set_scope(&de.scope);
        config
    }
}
