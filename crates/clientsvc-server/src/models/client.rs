//! Client API models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use clientsvc::Client;

// ============================================
// Request/Response DTOs
// ============================================

/// Register client request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub email: String,
}

/// Update client request. All fields optional; absent or blank fields are
/// left unchanged. Serves both PUT and PATCH call shapes. The dni is
/// immutable after registration and is not part of this shape.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// Client response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub email: String,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            first_name: client.first_name,
            last_name: client.last_name,
            dni: client.dni,
            email: client.email,
        }
    }
}

/// Standard error response structure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Timestamp of the error
    pub timestamp: DateTime<Utc>,
    /// HTTP status code
    pub status: u16,
    /// HTTP status description
    pub error: String,
    /// Detailed error message
    pub message: String,
}
