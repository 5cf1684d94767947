use super::*;

fn valid_receiver() -> ReceiverConfig {
    let mut receiver = ReceiverConfig::new();
    receiver.set_entity_name("orders");
    receiver
}

fn valid_sender() -> SenderConfig {
    let mut sender = SenderConfig::new();
    sender.set_entity_name("audit");
    sender
}

#[test]
fn test_scope_propagates_on_attach() {
    let mut config = PubSubConfig::new();
    config.set_scope("proj1");
    config.set_receiver(Some(valid_receiver()));
    config.set_sender(Some(valid_sender()));

    assert_eq!(config.receiver().unwrap().scope(), "proj1");
    assert_eq!(config.sender().unwrap().scope(), "proj1");
    assert_eq!(
        config.receiver().unwrap().topic_path(),
        "projects/proj1/topics/orders"
    );
}

#[test]
fn test_scope_propagates_on_change() {
    let mut config = PubSubConfig::new();
    config.set_scope("a");
    config.set_receiver(Some(valid_receiver()));

    config.set_scope("b");
    assert_eq!(config.receiver().unwrap().scope(), "b");
    assert_eq!(
        config.receiver().unwrap().topic_path(),
        "projects/b/topics/orders"
    );
}

#[test]
fn test_parent_scope_overwrites_child_scope_on_attach() {
    let mut receiver = valid_receiver();
    receiver.set_scope("other");

    let mut config = PubSubConfig::new();
    config.set_scope("proj1");
    config.set_receiver(Some(receiver));
    assert_eq!(config.receiver().unwrap().scope(), "proj1");
}

#[test]
fn test_accessor_resyncs_drifted_child() {
    let mut config = PubSubConfig::new();
    config.set_scope("proj1");
    config.set_receiver(Some(valid_receiver()));

    // Drift the child through the mutable accessor
    config.receiver_mut().unwrap().set_scope("rogue");

    // Read access restores the parent scope
    assert_eq!(config.receiver().unwrap().scope(), "proj1");
}

#[test]
fn test_validate_full_config() {
    let mut config = PubSubConfig::new();
    config.set_scope("proj1");
    config.set_receiver(Some(valid_receiver()));
    config.set_sender(Some(valid_sender()));
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_scope_only() {
    // No children attached: only the top-level scope is required
    let mut config = PubSubConfig::new();
    config.set_scope("proj1");
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_requires_scope() {
    let mut config = PubSubConfig::new();
    let err = config.validate().unwrap_err();
    assert_eq!(err.field(), "scope");
}

#[test]
fn test_validate_reports_invalid_receiver() {
    let mut config = PubSubConfig::new();
    config.set_scope("proj1");
    config.set_receiver(Some(ReceiverConfig::new())); // no entity name
    config.set_sender(Some(valid_sender()));

    let err = config.validate().unwrap_err();
    assert_eq!(err.field(), "entity_name");
}

#[test]
fn test_validate_reports_invalid_sender() {
    let mut config = PubSubConfig::new();
    config.set_scope("proj1");
    config.set_receiver(Some(valid_receiver()));
    config.set_sender(Some(SenderConfig::new())); // no entity name

    let err = config.validate().unwrap_err();
    assert_eq!(err.field(), "entity_name");
}

#[test]
fn test_validate_receiver_failure_short_circuits() {
    // Both children invalid: the receiver is checked first and its
    // failure is returned as-is
    let mut config = PubSubConfig::new();
    config.set_receiver(Some(ReceiverConfig::new()));
    config.set_sender(Some(SenderConfig::new()));

    let err = config.validate().unwrap_err();
    assert_eq!(err.field(), "scope");
}

#[test]
fn test_validate_resyncs_children_first() {
    let mut config = PubSubConfig::new();
    config.set_scope("proj1");
    config.set_receiver(Some(valid_receiver()));

    // Drift the child's scope to empty; validation re-syncs before checking
    config.receiver_mut().unwrap().set_scope("");
    assert!(config.validate().is_ok());
}

#[test]
fn test_deserialize_propagates_scope() {
    let toml = r#"
        scope = "proj1"

        [receiver]
        entity_name = "orders"

        [sender]
        entity_name = "audit"
        create_if_not_exists = true
    "#;

    let mut config: PubSubConfig = toml::from_str(toml).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.receiver().unwrap().scope(), "proj1");
    assert_eq!(
        config.receiver().unwrap().subscription_name(),
        "orders_default"
    );
    assert_eq!(
        config.sender().unwrap().topic_path(),
        "projects/proj1/topics/audit"
    );
    assert!(config.sender().unwrap().create_if_not_exists);
}

#[test]
fn test_deserialize_top_level_scope_is_authoritative() {
    let toml = r#"
        scope = "proj1"

        [receiver]
        scope = "other"
        entity_name = "orders"
    "#;

    let mut config: PubSubConfig = toml::from_str(toml).unwrap();
    assert_eq!(config.receiver().unwrap().scope(), "proj1");
}

#[test]
fn test_deserialize_without_children() {
    let toml = r#"scope = "proj1""#;

    let mut config: PubSubConfig = toml::from_str(toml).unwrap();
    assert!(config.receiver().is_none());
    assert!(config.sender().is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_json_auth_requires_auth_file_path() {
    let mut config = JsonAuthConfig::default();
    config.config.set_scope("proj1");

    let err = config.validate().unwrap_err();
    assert_eq!(err.field(), "auth_file_path");

    config.auth_file_path = std::path::PathBuf::from("/secrets/key.json");
    assert!(config.validate().is_ok());
}

#[test]
fn test_json_auth_validates_children_before_auth_file() {
    // Receiver failure wins over the missing credential path
    let mut config = JsonAuthConfig::default();
    config.config.set_scope("proj1");
    config.config.set_receiver(Some(ReceiverConfig::new()));

    let err = config.validate().unwrap_err();
    assert_eq!(err.field(), "entity_name");
}

#[test]
fn test_json_auth_deserialize_flattened() {
    let toml = r#"
        auth_file_path = "/secrets/key.json"
        scope = "proj1"

        [receiver]
        entity_name = "orders"
    "#;

    let mut config: JsonAuthConfig = toml::from_str(toml).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(
        config.auth_file_path,
        std::path::PathBuf::from("/secrets/key.json")
    );
    assert_eq!(config.config.receiver().unwrap().scope(), "proj1");
}

#[test]
fn test_load_config_from_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
            scope = "proj1"

            [receiver]
            entity_name = "orders"
        "#
    )
    .unwrap();

    let mut config = load_config(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.scope(), "proj1");
    assert_eq!(
        config.receiver().unwrap().topic_path(),
        "projects/proj1/topics/orders"
    );
}

#[test]
fn test_load_config_missing_file() {
    let result = load_config("/nonexistent/pubsub.toml");
    assert!(result.is_err());
}

#[test]
fn test_load_json_auth_config_from_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
            auth_file_path = "/secrets/key.json"
            scope = "proj1"

            [sender]
            entity_name = "audit"
        "#
    )
    .unwrap();

    let mut config = load_json_auth_config(file.path().to_str().unwrap()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(
        config.config.sender().unwrap().topic_path(),
        "projects/proj1/topics/audit"
    );
}

#[test]
fn test_display_without_children() {
    let mut config = PubSubConfig::new();
    config.set_scope("proj1");
    assert_eq!(
        config.to_string(),
        "scope: proj1, receiver: [not set], sender: [not set]"
    );
}

#[test]
fn test_display_with_children() {
    let mut config = PubSubConfig::new();
    config.set_scope("proj1");
    config.set_receiver(Some(valid_receiver()));
    let text = config.to_string();
    assert!(text.contains("scope: proj1"));
    assert!(text.contains("entity: orders"));
    assert!(text.contains("sender: [not set]"));
}
