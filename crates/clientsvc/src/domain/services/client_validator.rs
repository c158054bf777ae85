//! Client Validator
//!
//! Creation-time invariant checks for new client records. Stateless: the
//! only dependency is a read-only view of the repository, used for the
//! two existence lookups (by dni and by email).

use std::sync::Arc;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::{NewClient, DNI_MAX_LEN, DNI_MIN_LEN};
use crate::domain::errors::DomainError;
use crate::ports::ClientRepository;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w\-.]+@[\w\-]+\.[a-zA-Z]{2,}$").expect("email regex is valid")
});

/// Validates registration candidates before first persistence.
///
/// The check order is part of the contract: blank fields, duplicate dni,
/// duplicate email, email format, dni length, dni digits. When several
/// violations coexist, the first in that order is reported.
pub struct ClientValidator<R: ClientRepository> {
    repo: Arc<R>,
}

impl<R: ClientRepository> ClientValidator<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn validate_new_client(&self, candidate: &NewClient) -> Result<(), DomainError> {
        if is_blank(&candidate.first_name)
            || is_blank(&candidate.last_name)
            || is_blank(&candidate.dni)
            || is_blank(&candidate.email)
        {
            return Err(DomainError::MissingField);
        }

        if self.repo.exists_by_dni(&candidate.dni).await? {
            return Err(DomainError::DuplicateIdentifier { field: "dni" });
        }

        if self.repo.exists_by_email(&candidate.email).await? {
            return Err(DomainError::DuplicateIdentifier { field: "email" });
        }

        if !EMAIL_RE.is_match(&candidate.email) {
            return Err(DomainError::invalid_format("email has an invalid format"));
        }

        if candidate.dni.len() < DNI_MIN_LEN || candidate.dni.len() > DNI_MAX_LEN {
            return Err(DomainError::invalid_format(format!(
                "dni must be between {DNI_MIN_LEN} and {DNI_MAX_LEN} characters"
            )));
        }

        if !candidate.dni.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::invalid_format("dni must contain only digits"));
        }

        Ok(())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
