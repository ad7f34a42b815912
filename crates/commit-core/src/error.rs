//! Core error types for commit-core.
//!
//! The streak engine itself never fails; errors come from the edges of the
//! system: date parsing, the goal store, configuration, and lookups by id.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for commit-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Goal store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A goal or task id did not resolve
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub fn goal_not_found(id: impl Into<String>) -> Self {
        CoreError::NotFound {
            kind: "goal",
            id: id.into(),
        }
    }

    pub fn task_not_found(id: impl Into<String>) -> Self {
        CoreError::NotFound {
            kind: "task",
            id: id.into(),
        }
    }
}

/// Goal store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing database
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Store is locked")]
    Locked,

    /// The persisted document could not be decoded
    #[error("Stored state is corrupt: {0}")]
    Corrupt(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Not an ISO date or datetime
    #[error("Invalid date '{input}': expected YYYY-MM-DD or an ISO 8601 datetime")]
    InvalidDate { input: String },

    /// Virtual days run from 1 to `MAX_VIRTUAL_DAY`
    #[error("Invalid day number {day}: days run from 1 to {max}", max = crate::goal::MAX_VIRTUAL_DAY)]
    InvalidDay { day: u32 },

    /// Task text was blank
    #[error("Task title must not be empty")]
    EmptyTitle,
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _msg) => {
                if e.code == rusqlite::ErrorCode::DatabaseLocked
                    || e.code == rusqlite::ErrorCode::DatabaseBusy
                {
                    StoreError::Locked
                } else {
                    StoreError::QueryFailed(err.to_string())
                }
            }
            _ => StoreError::QueryFailed(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Store(err.into())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
