//! Service Ports
//!
//! Abstract interfaces for external services.

mod accounts;

pub use accounts::*;
