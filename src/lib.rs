// Entity naming and derived resource paths
pub mod entity;

// Receiver-side (subscription) configuration
pub mod receiver;

// Sender-side (publish) configuration
pub mod sender;

// Top-level pub/sub configuration
pub mod config;

// Shared validation errors
pub mod validation;
