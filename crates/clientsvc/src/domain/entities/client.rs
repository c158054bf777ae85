//! Client - Registered customer record
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Shortest accepted DNI (national identity number).
pub const DNI_MIN_LEN: usize = 8;
/// Longest accepted DNI.
pub const DNI_MAX_LEN: usize = 12;

/// A persisted client record.
///
/// The `id` is assigned by the persistence layer on first save and never
/// changes afterwards. `email` and `dni` are globally unique across all
/// client records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dni: String,
}

/// A registration candidate that has not been persisted yet.
///
/// Clients are only ever created through registration; there is no way to
/// construct a `Client` with a caller-chosen id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dni: String,
}

impl NewClient {
    pub fn new(first_name: String, last_name: String, dni: String, email: String) -> Self {
        Self {
            first_name,
            last_name,
            email,
            dni,
        }
    }
}

impl Client {
    /// Promote a candidate to a persisted record with its assigned id.
    pub fn from_candidate(id: i64, candidate: &NewClient) -> Self {
        Self {
            id,
            first_name: candidate.first_name.clone(),
            last_name: candidate.last_name.clone(),
            email: candidate.email.clone(),
            dni: candidate.dni.clone(),
        }
    }
}
