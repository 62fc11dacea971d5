//! Error types for flowforge.
//!
//! This module is intentionally dependency-light and shared across crates.

use thiserror::Error;

/// Errors that can occur while assembling provider registrations.
#[derive(Error, Debug)]
pub enum FlowforgeError {
    /// The requested provider is not registered in this build.
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// A provider component failed to produce a usable registration.
    #[error("Provider {provider} failed to initialize: {reason}")]
    ComponentInit { provider: String, reason: String },

    /// A component declared an invalid input set.
    #[error("Invalid input declaration: {0}")]
    InvalidInput(String),
}

/// Result type for flowforge operations.
pub type Result<T> = std::result::Result<T, FlowforgeError>;
