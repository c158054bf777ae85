//! Accounts Service Port
//!
//! Abstract interface over the external service that owns account data,
//! independent of any particular remote-call mechanism.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Service interface for the deletion-time dependency check.
#[async_trait]
pub trait AccountsClient: Send + Sync {
    /// Whether the client currently holds any account.
    ///
    /// Returns `Ok(true)` only when the remote query succeeds and reports
    /// a non-empty account list. A remote call that cannot complete is
    /// `Err(DependencyUnavailable)` - never `Ok(false)` - so callers can
    /// tell "no accounts" apart from "could not determine".
    async fn has_accounts(&self, client_id: i64) -> Result<bool, DomainError>;
}
