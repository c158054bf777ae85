//! Domain Services
//!
//! Stateless domain logic that works through the ports.

mod client_validator;

pub use client_validator::*;
