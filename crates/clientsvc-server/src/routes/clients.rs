//! Client Routes - Registry Management
//!
//! HTTP handlers that delegate to ClientService for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::models::{ClientResponse, CreateClientRequest, ErrorResponse, UpdateClientRequest};
use crate::routes::error_response;
use crate::AppState;

/// Register a new client
#[utoipa::path(
    post,
    path = "/clients",
    request_body = CreateClientRequest,
    responses(
        (status = 200, description = "Client registered successfully", body = ClientResponse),
        (status = 400, description = "Invalid client data", body = ErrorResponse),
        (status = 409, description = "Email or DNI already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Clients"
)]
pub async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<CreateClientRequest>,
) -> Result<Json<ClientResponse>, (StatusCode, Json<ErrorResponse>)> {
    let client = state
        .client_service
        .register(
            payload.first_name,
            payload.last_name,
            payload.dni,
            payload.email,
        )
        .await
        .map_err(error_response)?;

    Ok(Json(client.into()))
}

/// List all clients
#[utoipa::path(
    get,
    path = "/clients",
    responses(
        (status = 200, description = "List of all clients", body = Vec<ClientResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Clients"
)]
pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let clients = state.client_service.list().await.map_err(error_response)?;

    Ok(Json(clients.into_iter().map(Into::into).collect()))
}

/// Get client by id
#[utoipa::path(
    get,
    path = "/clients/{id}",
    params(
        ("id" = i64, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client found", body = ClientResponse),
        (status = 404, description = "Client not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Clients"
)]
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ClientResponse>, (StatusCode, Json<ErrorResponse>)> {
    let client = state
        .client_service
        .get(id)
        .await
        .map_err(error_response)?;

    Ok(Json(client.into()))
}

/// Update client (partial; PUT and PATCH share this handler)
#[utoipa::path(
    put,
    path = "/clients/{id}",
    params(
        ("id" = i64, Path, description = "Client ID")
    ),
    request_body = UpdateClientRequest,
    responses(
        (status = 200, description = "Client updated successfully", body = ClientResponse),
        (status = 404, description = "Client not found", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Clients"
)]
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateClientRequest>,
) -> Result<Json<ClientResponse>, (StatusCode, Json<ErrorResponse>)> {
    let client = state
        .client_service
        .update(id, payload.first_name, payload.last_name, payload.email)
        .await
        .map_err(error_response)?;

    Ok(Json(client.into()))
}

/// Delete client
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    params(
        ("id" = i64, Path, description = "Client ID")
    ),
    responses(
        (status = 204, description = "Client deleted successfully"),
        (status = 404, description = "Client not found", body = ErrorResponse),
        (status = 409, description = "Client still owns accounts", body = ErrorResponse),
        (status = 502, description = "Accounts service unavailable", body = ErrorResponse)
    ),
    tag = "Clients"
)]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    state
        .client_service
        .delete(id)
        .await
        .map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/clients", get(list_clients).post(create_client))
        .route(
            "/clients/:id",
            get(get_client)
                .put(update_client)
                .patch(update_client)
                .delete(delete_client),
        )
}
