//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod accounts;
pub mod postgres;

// Re-exports
pub use accounts::HttpAccountsClient;
pub use postgres::PgClientRepository;
