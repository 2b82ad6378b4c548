//! Error types for KathaNav

use crate::io::bag::ChannelKind;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, KathaError>;

/// KathaNav error type
#[derive(Error, Debug)]
pub enum KathaError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid bag file format
    #[error("Invalid bag format: {0}")]
    InvalidFormat(String),

    /// A requested channel contained no messages
    #[error("no samples available for the requested channel: {0}")]
    EmptyChannel(ChannelKind),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<postcard::Error> for KathaError {
    fn from(e: postcard::Error) -> Self {
        KathaError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for KathaError {
    fn from(e: toml::de::Error) -> Self {
        KathaError::Config(e.to_string())
    }
}
