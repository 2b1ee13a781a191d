//! Error types for roster-core
//!
//! The reconciliation engine itself is total. Errors only arise at the
//! edges: loading configuration and reading profile input.

use thiserror::Error;

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;

/// Main error type for roster operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// Configuration could not be parsed or failed validation
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Reading an input file failed
    #[error("IO error: {0}")]
    Io(String),

    /// Input could not be deserialized
    #[error("Parse error: {0}")]
    Parse(String),

    /// Input is structurally unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        RosterError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        RosterError::Parse(err.to_string())
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// TOML or JSON could not be parsed
    #[error("Config parse error: {0}")]
    Parse(String),

    /// Configuration could not be written as TOML
    #[error("Config serialize error: {0}")]
    Serialize(String),

    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),
}
