//! Client Repository Port
//!
//! Abstract interface for client persistence operations, keyed by id,
//! email, and dni.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Client, NewClient};

/// Repository interface for client records
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Find a client by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, DomainError>;

    /// Find a client by email
    async fn find_by_email(&self, email: &str) -> Result<Option<Client>, DomainError>;

    /// Find a client by dni
    async fn find_by_dni(&self, dni: &str) -> Result<Option<Client>, DomainError>;

    /// Find all clients in insertion order
    async fn find_all(&self) -> Result<Vec<Client>, DomainError>;

    /// Check whether a client with this id exists
    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;

    /// Check whether a client with this email exists
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Check whether a client with this dni exists
    async fn exists_by_dni(&self, dni: &str) -> Result<bool, DomainError>;

    /// Persist a new client; the store assigns the id
    async fn insert(&self, candidate: &NewClient) -> Result<Client, DomainError>;

    /// Persist changes to an existing client
    async fn update(&self, client: &Client) -> Result<Client, DomainError>;

    /// Delete a client by id, returning whether a record was removed
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
