/// Suffix that marks an entity as a dead-letter entity
pub const DEAD_LETTER_SUFFIX: &str = "_deadletter";

/// Suffix used for default subscription names
pub const DEFAULT_SUBSCRIPTION_SUFFIX: &str = "_default";

/// Names derived from a scope and an entity name
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedNames {
    /// Fully-qualified topic path: projects/{scope}/topics/{entity}
    pub topic_path: String,
    /// Name of the dead-letter entity ({entity}_deadletter), if applicable
    pub dead_letter_entity_name: Option<String>,
    /// Fully-qualified dead-letter topic path, if applicable
    pub dead_letter_topic_path: Option<String>,
}

/// Derive the fully-qualified resource names for an entity.
///
/// Pure function of its two inputs. The scope may be empty; derivation
/// still runs and produces a path with an empty segment (non-emptiness is
/// a validation concern, not a naming one).
///
/// Dead-letter names are skipped when the entity name is empty (so that
/// "_deadletter" alone is never produced) or when it already ends with the
/// dead-letter suffix (so that dead-letter entities don't get dead-letters
/// of their own). The suffix check is a literal case-sensitive match.
///
/// # Examples
///
/// ```
/// use pubsub_config::entity::derive_names;
///
/// let names = derive_names("proj1", "orders");
/// assert_eq!(names.topic_path, "projects/proj1/topics/orders");
/// assert_eq!(
///     names.dead_letter_topic_path.as_deref(),
///     Some("projects/proj1/topics/orders_deadletter")
/// );
///
/// let names = derive_names("proj1", "orders_deadletter");
/// assert_eq!(names.dead_letter_topic_path, None);
/// ```
pub fn derive_names(scope: &str, entity_name: &str) -> DerivedNames {
    if entity_name.is_empty() || entity_name.ends_with(DEAD_LETTER_SUFFIX) {
        return DerivedNames {
            topic_path: topic_path(scope, entity_name),
            dead_letter_entity_name: None,
            dead_letter_topic_path: None,
        };
    }

    let dead_letter_entity_name = format!("{}{}", entity_name, DEAD_LETTER_SUFFIX);

    DerivedNames {
        topic_path: topic_path(scope, entity_name),
        dead_letter_topic_path: Some(topic_path(scope, &dead_letter_entity_name)),
        dead_letter_entity_name: Some(dead_letter_entity_name),
    }
}

/// Build the fully-qualified topic path for an entity
pub fn topic_path(scope: &str, entity_name: &str) -> String {
    format!("projects/{}/topics/{}", scope, entity_name)
}

/// Default subscription name for an entity: {entity}_default
pub fn default_subscription_name(entity_name: &str) -> String {
    format!("{}{}", entity_name, DEFAULT_SUBSCRIPTION_SUFFIX)
}
