//! Errors raised around a scan
//!
//! Scanning itself cannot fail. These cover the surfaces around it: reading documents,
//! loading configuration and serializing results.

use std::fmt;

#[derive(Debug)]
pub enum LexyError {
    /// Reading a document failed
    Io { path: String, message: String },
    /// Configuration could not be loaded or deserialized
    Config(config::ConfigError),
    /// A result could not be rendered in the requested format
    Format(String),
}

impl fmt::Display for LexyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexyError::Io { path, message } => write!(f, "IO error reading {}: {}", path, message),
            LexyError::Config(err) => write!(f, "Configuration error: {}", err),
            LexyError::Format(msg) => write!(f, "Format error: {}", msg),
        }
    }
}

impl std::error::Error for LexyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LexyError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for LexyError {
    fn from(err: config::ConfigError) -> Self {
        LexyError::Config(err)
    }
}

impl From<serde_json::Error> for LexyError {
    fn from(err: serde_json::Error) -> Self {
        LexyError::Format(err.to_string())
    }
}

impl From<serde_yaml::Error> for LexyError {
    fn from(err: serde_yaml::Error) -> Self {
        LexyError::Format(err.to_string())
    }
}
