use std::fmt;

use serde::Deserialize;

use crate::entity::{default_subscription_name, EntityConfig};
use crate::validation::ValidationError;


/// Attribute filter applied to a subscription when the entity is a
/// topic-style resource (ignored for queue-style entities).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntityFilter {
    pub key: String,
    pub value: String,
}

/// Receiver-side configuration: which entity to read from, under which
/// subscription, and how to treat dead-lettered messages.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "ReceiverConfigDe")]
pub struct ReceiverConfig {
    entity: EntityConfig,
    subscription_name: String,
    /// Filter applied to the subscription (topics only)
    pub entity_filter: Option<EntityFilter>,
    /// Create the entity on the broker if it does not already exist
    pub create_if_not_exists: bool,
    /// Read from the dead-letter entity instead of the main entity
    pub read_from_error_entity: bool,
}

impl ReceiverConfig {
    /// Create an empty receiver config
    pub fn new() -> Self {
        Self {
            entity: EntityConfig::new(),
            subscription_name: String::new(),
            entity_filter: None,
            create_if_not_exists: false,
            read_from_error_entity: false,
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

    /// Set the entity name and re-derive the resource names.
    ///
    /// If no subscription name has been set yet, it defaults to
    /// "{entity_name}_default". The default is sticky: once the
    /// subscription name is non-empty it is never recomputed, so later
    /// entity-name changes leave it untouched.
    pub fn set_entity_name(&mut self, entity_name: &str) {
        if self.subscription_name.is_empty() {
            self.subscription_name = default_subscription_name(entity_name);
        }
        self.entity.set_entity_name(entity_name);
    }

    /// The subscription to receive from; empty until an entity name or an
    /// explicit subscription name is set
    pub fn subscription_name(&self) -> &str {
        &self.subscription_name
    }

    /// Override the subscription name explicitly
    pub fn set_subscription_name(&mut self, subscription_name: &str) {
        self.subscription_name = subscription_name.to_string();
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

    /// Subscription name on the dead-letter entity. Always computed from
    /// the current dead-letter entity name, never stored.
    pub fn dead_letter_subscription_name(&self) -> Option<String> {
        self.entity
            .dead_letter_entity_name()
            .map(default_subscription_name)
    }

    /// Validate the receiver config: both scope and entity name are
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

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReceiverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, subscription: {}, dead-letter subscription: {}, create if not exists: {}, read from error entity: {}",
            self.entity,
            self.subscription_name,
            self.dead_letter_subscription_name()
                .as_deref()
                .unwrap_or("[not set]"),
            self.create_if_not_exists,
            self.read_from_error_entity
        )
    }
}

/// Plain shape for deserialization; conversion runs the setters so
/// derived names and the sticky subscription default behave exactly as
/// they do for hand-built configs.
#[derive(Deserialize, Default)]
#[serde(default)]
struct ReceiverConfigDe {
    scope: String,
    entity_name: String,
    subscription_name: Option<String>,
    entity_filter: Option<EntityFilter>,
    create_if_not_exists: bool,
    read_from_error_entity: bool,
}

impl From<ReceiverConfigDe> for ReceiverConfig {
    fn from(de: ReceiverConfigDe) -> Self {
        let mut config = ReceiverConfig::new();
        if let Some(subscription_name) = de.subscription_name {
            config.set_subscription_name(&subscription_name);
        }
        if !de.entity_name.is_empty() {
            config.set_entity_name(&de.entity_name);
        }
        config.set_scope(&de.scope);
        config.entity_filter = de.entity_filter;
        config.create_if_not_exists = de.create_if_not_exists;
        config.read_from_error_entity = de.read_from_error_entity;
        config
    }
}
