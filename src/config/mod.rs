use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use crate::validation::ValidationError;

#[cfg(test)]
mod tests;

// Re-export the nested config types
pub use crate::receiver::{EntityFilter, ReceiverConfig};
pub use crate::sender::SenderConfig;

/// Top-level pub/sub configuration.
///
/// The scope is the single source of truth: setting it pushes it into any
/// attached receiver/sender config, and the receiver/sender accessors
/// re-propagate it before returning, so a child's scope can never drift
/// from the parent's.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "PubSubConfigDe")]
pub struct PubSubConfig {
    scope: String,
    receiver: Option<ReceiverConfig>,
    sender: Option<SenderConfig>,
}

impl PubSubConfig {
    /// Create an empty config with no receiver or sender
    pub fn new() -> Self {
        Self {
            scope: String::new(),
            receiver: None,
            sender: None,
        }
    }

    /// The messaging namespace identifier
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Set the scope and propagate it into any attached receiver/sender
    pub fn set_scope(&mut self, scope: &str) {
        self.scope = scope.to_string();
        self.sync_children();
    }

    /// The receiver config, if one is attached. Re-propagates the current
    /// scope before returning.
    pub fn receiver(&mut self) -> Option<&ReceiverConfig> {
        let scope = self.scope.clone();
        if let Some(receiver) = self.receiver.as_mut() {
            receiver.set_scope(&scope);
        }
        self.receiver.as_ref()
    }

    /// Mutable access to the receiver config, if one is attached.
    /// Re-propagates the current scope before returning.
    pub fn receiver_mut(&mut self) -> Option<&mut ReceiverConfig> {
        let scope = self.scope.clone();
        if let Some(receiver) = self.receiver.as_mut() {
            receiver.set_scope(&scope);
        }
        self.receiver.as_mut()
    }

    /// Attach (or clear) the receiver config. The parent scope overwrites
    /// whatever scope the child carried.
    pub fn set_receiver(&mut self, receiver: Option<ReceiverConfig>) {
        self.receiver = receiver;
        let scope = self.scope.clone();
        if let Some(receiver) = self.receiver.as_mut() {
            receiver.set_scope(&scope);
        }
    }

    /// The sender config, if one is attached. Re-propagates the current
    /// scope before returning.
    pub fn sender(&mut self) -> Option<&SenderConfig> {
        let scope = self.scope.clone();
        if let Some(sender) = self.sender.as_mut() {
            sender.set_scope(&scope);
        }
        self.sender.as_ref()
    }

    /// Mutable access to the sender config, if one is attached.
    /// Re-propagates the current scope before returning.
    pub fn sender_mut(&mut self) -> Option<&mut SenderConfig> {
        let scope = self.scope.clone();
        if let Some(sender) = self.sender.as_mut() {
            sender.set_scope(&scope);
        }
        self.sender.as_mut()
    }

    /// Attach (or clear) the sender config. The parent scope overwrites
    /// whatever scope the child carried.
    pub fn set_sender(&mut self, sender: Option<SenderConfig>) {
        self.sender = sender;
        let scope = self.scope.clone();
        if let Some(sender) = self.sender.as_mut() {
            sender.set_scope(&scope);
        }
    }

    fn sync_children(&mut self) {
        let scope = self.scope.clone();
        if let Some(receiver) = self.receiver.as_mut() {
            receiver.set_scope(&scope);
        }
        if let Some(sender) = self.sender.as_mut() {
            sender.set_scope(&scope);
        }
    }

    /// Validate the whole config, depth-first with the first failure
    /// winning: receiver (if attached), then sender (if attached), then
    /// the top-level scope.
    ///
    /// Takes `&mut self` because the scope is re-propagated into the
    /// children before they are checked, mirroring the accessors.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.sync_children();
        if let Some(receiver) = &self.receiver {
            receiver.validate()?;
        }
        if let Some(sender) = &self.sender {
            sender.validate()?;
        }
        if self.scope.is_empty() {
            return Err(ValidationError::required("scope"));
        }
        Ok(())
    }
}

impl Default for PubSubConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PubSubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope: {}, receiver: ", self.scope)?;
        match &self.receiver {
            Some(receiver) => write!(f, "[{}]", receiver)?,
            None => write!(f, "[not set]")?,
        }
        write!(f, ", sender: ")?;
        match &self.sender {
            Some(sender) => write!(f, "[{}]", sender),
            None => write!(f, "[not set]"),
        }
    }
}

/// Plain shape for deserialization; conversion runs the setters, with the
/// top-level scope set last so it overwrites any scope given inside the
/// receiver/sender tables.
#[derive(Deserialize, Default)]
#[serde(default)]
struct PubSubConfigDe {
    scope: String,
    receiver: Option<ReceiverConfig>,
    sender: Option<SenderConfig>,
}

impl From<PubSubConfigDe> for PubSubConfig {
    fn from(de: PubSubConfigDe) -> Self {
        let mut config = PubSubConfig::new();
        config.set_receiver(de.receiver);
        config.set_sender(de.sender);
        config.set_scope(&de.scope);
        config
    }
}

/// Pub/sub configuration authenticated with an explicit JSON credential
/// file. Without this wrapper the client falls back to ambient/default
/// credential resolution; actually reading the file is the client's
/// concern.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JsonAuthConfig {
    /// Location of the JSON credential file
    #[serde(default)]
    pub auth_file_path: PathBuf,
    /// The wrapped pub/sub config
    #[serde(flatten)]
    pub config: PubSubConfig,
}

impl JsonAuthConfig {
    /// Validate the wrapped config first (receiver, sender, scope), then
    /// require the credential file path.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.config.validate()?;
        if self.auth_file_path.as_os_str().is_empty() {
            return Err(ValidationError::required("auth_file_path"));
        }
        Ok(())
    }
}

impl fmt::Display for JsonAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "auth file: {}, {}",
            self.auth_file_path.display(),
            self.config
        )
    }
}

/// Load a pub/sub configuration from a TOML file
pub fn load_config(path: &str) -> Result<PubSubConfig, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let config: PubSubConfig = toml::from_str(&contents)?;
    debug!("loaded pub/sub config from {}", path);
    Ok(config)
}

/// Load a JSON-file-authenticated pub/sub configuration from a TOML file
pub fn load_json_auth_config(path: &str) -> Result<JsonAuthConfig, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let config: JsonAuthConfig = toml::from_str(&contents)?;
    debug!("loaded json-auth pub/sub config from {}", path);
    Ok(config)
}
