//! Client Registry Domain Library
//!
//! Core domain types and interfaces for the client registry service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Client, NewClient)
//!   - `services/`: Domain services (ClientValidator)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use clientsvc::domain::{Client, NewClient};
//! use clientsvc::ports::{AccountsClient, ClientRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{Client, ClientValidator, DomainError, NewClient};
pub use ports::{AccountsClient, ClientRepository};
