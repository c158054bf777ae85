//! API Models
//!
//! Request/response DTOs for the HTTP layer.

mod client;

pub use client::*;
