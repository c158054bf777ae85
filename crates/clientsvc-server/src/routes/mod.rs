//! HTTP Routes
//!
//! Thin handlers that delegate to the application service and map domain
//! errors onto HTTP statuses.

pub mod clients;
pub mod swagger;

use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use clientsvc::DomainError;

use crate::models::ErrorResponse;

/// Map a domain error onto the status its kind calls for: bad input,
/// conflict, not-found, upstream-unavailable, or internal.
fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::MissingField | DomainError::InvalidFormat(_) => StatusCode::BAD_REQUEST,
        DomainError::DuplicateIdentifier { .. } | DomainError::HasDependents { .. } => {
            StatusCode::CONFLICT
        }
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::DependencyUnavailable(_) => StatusCode::BAD_GATEWAY,
        DomainError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn error_response(err: DomainError) -> (StatusCode, Json<ErrorResponse>) {
    let status = status_for(&err);
    (
        status,
        Json(ErrorResponse {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string(),
            message: err.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_error_kind_to_its_status() {
        let cases = [
            (DomainError::MissingField, StatusCode::BAD_REQUEST),
            (
                DomainError::invalid_format("bad dni"),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::DuplicateIdentifier { field: "email" },
                StatusCode::CONFLICT,
            ),
            (DomainError::NotFound { id: 1 }, StatusCode::NOT_FOUND),
            (DomainError::HasDependents { id: 1 }, StatusCode::CONFLICT),
            (
                DomainError::DependencyUnavailable("timeout".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                DomainError::Repository("broken".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(status_for(&err), expected, "{err}");
        }
    }

    #[test]
    fn error_response_carries_the_domain_message() {
        let (status, Json(body)) = error_response(DomainError::NotFound { id: 42 });
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.status, 404);
        assert_eq!(body.error, "Not Found");
        assert_eq!(body.message, "client not found: 42");
    }
}
