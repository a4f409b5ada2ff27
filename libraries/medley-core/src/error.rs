/// Core error types for Medley
use thiserror::Error;

/// Result type alias using `MedleyError`
pub type Result<T> = std::result::Result<T, MedleyError>;

/// Core error type for Medley
///
/// "Not found" and "access denied" are ordinary outcomes returned to the
/// caller, not exceptional control flow: every engine operation has one
/// success type and one rejection type.
#[derive(Error, Debug)]
pub enum MedleyError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity that was looked up
        entity: String,
        /// Identifier that did not resolve
        id: String,
    },

    /// Visibility or membership check failed
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Input failed validation (charset, length, missing fields, cardinality)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Backing store failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Identity or other collaborator failure
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl MedleyError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Create an access denied error
    pub fn access_denied(msg: impl Into<String>) -> Self {
        Self::AccessDenied(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an upstream collaborator error
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Whether this error is a not-found outcome
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this error is an access-denied outcome
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied(_))
    }
}
