//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Client: a registered client with its persistence-assigned id
//! - NewClient: a registration candidate, not yet persisted

mod client;

pub use client::*;
