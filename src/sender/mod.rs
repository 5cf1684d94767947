use std::fmt;

use serde::Deserialize;

use crate::entity::EntityConfig;
use crate::validation::ValidationError;


/// Sender-side configuration: which entity to publish to. No
/// subscription concept on the send path.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "SenderConfigDe")]
pub struct SenderConfig {
    entity: EntityConfig,
    /// Create the entity on the broker if it does not already exist
    pub create_if_not_exists: bool,
}

impl SenderConfig {
    /// Create an empty sender config
    pub fn new() -> Self {
        Self {
            entity: EntityConfig::new(),
            create_if_not_exists: false,
        }
    }

    /// The messaging namespace identifier
    pub fn scope(&self) -> &str {
        self.entity.scope()
    }

    /// Set the scope and re-derive the resource names
    pub fn set_scope(&mut self, scope: &str) {
        self.entity.set_scope(scope);
    }

    /// The short logical entity name
    pub fn entity_name(&self) -> &str {
        self.entity.entity_name()
    }

    /// Set the entity name and re-derive the resource names
    pub fn set_entity_name(&mut self, entity_name: &str) {
        self.entity.set_entity_name(entity_name);
    }

    /// Fully-qualified topic path: projects/{scope}/topics/{entity}
    pub fn topic_path(&self) -> &str {
        self.entity.topic_path()
    }

    /// Dead-letter entity name, if this entity has one
    pub fn dead_letter_entity_name(&self) -> Option<&str> {
        self.entity.dead_letter_entity_name()
    }

    /// Fully-qualified dead-letter topic path, if this entity has one
    pub fn dead_letter_topic_path(&self) -> Option<&str> {
        self.entity.dead_letter_topic_path()
    }

    /// Validate the sender config: both scope and entity name are
    /// required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.scope().is_empty() {
            return Err(ValidationError::required("scope"));
        }
        if self.entity_name().is_empty() {
            return Err(ValidationError::required("entity_name"));
        }
        Ok(())
    }
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, create if not exists: {}",
            self.entity, self.create_if_not_exists
        )
    }
}

/// Plain shape for deserialization; conversion runs the setters so the
/// derived names are consistent for deserialized configs too.
#[derive(Deserialize, Default)]
#[serde(default)]
struct SenderConfigDe {
    scope: String,
    entity_name: String,
    create_if_not_exists: bool,
}

impl From<SenderConfigDe> for SenderConfig {
    fn from(de: SenderConfigDe) -> Self {
        let mut config = SenderConfig::new();
        config.set_entity_name(&de.entity_name);
        config.set_scope(&de.scope);
        config.create_if_not_exists = de.create_if_not_exists;
        config
    }
}
