//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required field was blank on registration.
    #[error("all fields are required")]
    MissingField,

    /// Email or DNI failed a format rule.
    #[error("{0}")]
    InvalidFormat(String),

    /// Email or DNI collides with an existing client record.
    #[error("{field} is already in use")]
    DuplicateIdentifier { field: &'static str },

    /// No client record with the given id.
    #[error("client not found: {id}")]
    NotFound { id: i64 },

    /// The client still owns accounts in the accounts service.
    #[error("cannot delete client {id} with active accounts")]
    HasDependents { id: i64 },

    /// The remote accounts check could not complete. Distinct from
    /// "client has no accounts" - callers must not treat this as `false`.
    #[error("could not verify accounts: {0}")]
    DependencyUnavailable(String),

    #[error("repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn invalid_format<T: Into<String>>(message: T) -> Self {
        Self::InvalidFormat(message.into())
    }
}
