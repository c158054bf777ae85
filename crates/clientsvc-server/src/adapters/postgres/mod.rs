//! PostgreSQL Repository Implementations

mod client_repository;

pub use client_repository::PgClientRepository;
