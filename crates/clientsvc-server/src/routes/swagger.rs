//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ClientResponse, CreateClientRequest, ErrorResponse, UpdateClientRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::clients::list_clients,
        super::clients::create_client,
        super::clients::get_client,
        super::clients::update_client,
        super::clients::delete_client,
    ),
    info(
        title = "Client Registry API",
        version = "0.1.0",
        description = "Client lifecycle management for the banking platform: registration, lookup, partial updates, and account-guarded deletion.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Clients", description = "Client registry operations"),
    ),
    components(
        schemas(
            CreateClientRequest,
            UpdateClientRequest,
            ClientResponse,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
