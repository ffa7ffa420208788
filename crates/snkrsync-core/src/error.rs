//! Error types for the SnkrSync client core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the SnkrSync client core.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum SnkrError {
    /// Submit attempted while the channel session is not open
    #[error("Channel not ready: {0}")]
    NotReady(String),

    /// Channel-level failure (connect, send, or mid-session error)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Malformed inbound message dropped at the channel boundary
    #[error("Parse error: {0}")]
    Parse(String),

    /// REST API failure (plan lookup and friends)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Submit attempted with an empty selection
    #[error("Nothing selected")]
    EmptySelection,

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SnkrError {
    /// Creates a NotReady error
    pub fn not_ready(message: impl Into<String>) -> Self {
        Self::NotReady(message.into())
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a Parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates an Http error
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a NotReady error
    pub fn is_not_ready(&self) -> bool {
        matches!(self, Self::NotReady(_))
    }

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this is a Parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Check if this is an Http error
    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}

impl From<std::io::Error> for SnkrError {
    fn from(err: std::io::Error) -> Self {
        Self::Transport(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for SnkrError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, SnkrError>`.
pub type Result<T> = std::result::Result<T, SnkrError>;
