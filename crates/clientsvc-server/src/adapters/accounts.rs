//! HTTP Accounts Client
//!
//! Queries the external accounts service over JSON/HTTP using reqwest.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use clientsvc::{AccountsClient, DomainError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP implementation of AccountsClient
pub struct HttpAccountsClient {
    client: Client,
    base_url: String,
}

/// Account as reported by the accounts service. Only the fields this
/// service cares about; unknown fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct AccountSummary {
    id: i64,
    account_number: String,
    client_id: i64,
}

impl HttpAccountsClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, base_url }
    }
}

#[async_trait]
impl AccountsClient for HttpAccountsClient {
    async fn has_accounts(&self, client_id: i64) -> Result<bool, DomainError> {
        let url = format!("{}/accounts/{}", self.base_url, client_id);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Error while checking accounts for client {}: {}", client_id, e);
            DomainError::DependencyUnavailable(format!("client {client_id}: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                "Accounts service returned {} while checking client {}",
                status,
                client_id
            );
            return Err(DomainError::DependencyUnavailable(format!(
                "client {client_id}: accounts service returned {status}"
            )));
        }

        let accounts: Vec<AccountSummary> = response.json().await.map_err(|e| {
            DomainError::DependencyUnavailable(format!("client {client_id}: bad response: {e}"))
        })?;

        tracing::info!(
            "Checked accounts for client {}: found {} accounts",
            client_id,
            accounts.len()
        );
        Ok(!accounts.is_empty())
    }
}
