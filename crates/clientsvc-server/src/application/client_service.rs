//! Client Application Service (Use Case)
//!
//! Orchestrates the client lifecycle: register, fetch, list, update,
//! delete. Owns all business rules; each operation is fully applied or
//! fully rejected.

use std::sync::Arc;

use clientsvc::{AccountsClient, Client, ClientRepository, ClientValidator, DomainError, NewClient};

/// Application service for client lifecycle operations
pub struct ClientService<R: ClientRepository, A: AccountsClient> {
    repo: Arc<R>,
    accounts: Arc<A>,
    validator: ClientValidator<R>,
}

impl<R: ClientRepository, A: AccountsClient> ClientService<R, A> {
    pub fn new(repo: Arc<R>, accounts: Arc<A>) -> Self {
        let validator = ClientValidator::new(repo.clone());
        Self {
            repo,
            accounts,
            validator,
        }
    }

    /// Register a new client. Any validator failure aborts before
    /// anything is persisted.
    pub async fn register(
        &self,
        first_name: String,
        last_name: String,
        dni: String,
        email: String,
    ) -> Result<Client, DomainError> {
        let candidate = NewClient::new(first_name, last_name, dni, email);

        tracing::info!("Attempting to register client with DNI: {}", candidate.dni);
        self.validator.validate_new_client(&candidate).await?;

        let saved = self.repo.insert(&candidate).await?;
        tracing::info!("Client registered successfully with ID: {}", saved.id);
        Ok(saved)
    }

    /// Get a client by id
    pub async fn get(&self, id: i64) -> Result<Client, DomainError> {
        tracing::info!("Fetching client with ID: {}", id);
        self.repo.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!("Client not found with ID: {}", id);
            DomainError::NotFound { id }
        })
    }

    /// List all clients in insertion order
    pub async fn list(&self) -> Result<Vec<Client>, DomainError> {
        tracing::info!("Listing all clients");
        self.repo.find_all().await
    }

    /// Partial update: absent or blank fields are left unchanged.
    ///
    /// Names are trimmed before being applied. The email is applied only
    /// when it differs case-insensitively from the stored value, after a
    /// uniqueness check; a case-insensitive match is treated as "no
    /// change" and skips the check entirely. The dni is immutable after
    /// registration.
    pub async fn update(
        &self,
        id: i64,
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
    ) -> Result<Client, DomainError> {
        tracing::info!("Updating client with ID: {}", id);
        let mut client = self.repo.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!("Client not found for update. ID: {}", id);
            DomainError::NotFound { id }
        })?;

        apply_if_present(&mut client.first_name, first_name);
        apply_if_present(&mut client.last_name, last_name);

        if let Some(email) = email {
            if !email.trim().is_empty() && !email.eq_ignore_ascii_case(&client.email) {
                if self.repo.exists_by_email(&email).await? {
                    tracing::warn!("Email already in use: {}", email);
                    return Err(DomainError::DuplicateIdentifier { field: "email" });
                }
                client.email = email;
            }
        }

        let updated = self.repo.update(&client).await?;
        tracing::info!("Client updated successfully. ID: {}", updated.id);
        Ok(updated)
    }

    /// Delete a client, blocked while the client still owns accounts.
    ///
    /// A failed dependency check aborts the deletion rather than letting
    /// it proceed unverified.
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        tracing::info!("Attempting to delete client with ID: {}", id);
        if !self.repo.exists_by_id(id).await? {
            tracing::warn!("Client not found for deletion. ID: {}", id);
            return Err(DomainError::NotFound { id });
        }

        if self.accounts.has_accounts(id).await? {
            tracing::warn!("Client has active accounts. Cannot delete. ID: {}", id);
            return Err(DomainError::HasDependents { id });
        }

        self.repo.delete(id).await?;
        tracing::info!("Client deleted successfully. ID: {}", id);
        Ok(())
    }
}

fn apply_if_present(target: &mut String, value: Option<String>) {
    if let Some(value) = value {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            *target = trimmed.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryRepo {
        clients: Mutex<Vec<Client>>,
        // Last assigned id; the store hands out ids, not the caller.
        last_id: Mutex<i64>,
    }

    impl InMemoryRepo {
        fn seeded(clients: Vec<Client>) -> Arc<Self> {
            let last_id = clients.iter().map(|c| c.id).max().unwrap_or(0);
            Arc::new(Self {
                clients: Mutex::new(clients),
                last_id: Mutex::new(last_id),
            })
        }
    }

    #[async_trait]
    impl ClientRepository for InMemoryRepo {
        async fn find_by_id(&self, id: i64) -> Result<Option<Client>, DomainError> {
            Ok(self
                .clients
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == id)
                .cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Client>, DomainError> {
            Ok(self
                .clients
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.email == email)
                .cloned())
        }

        async fn find_by_dni(&self, dni: &str) -> Result<Option<Client>, DomainError> {
            Ok(self
                .clients
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.dni == dni)
                .cloned())
        }

        async fn find_all(&self) -> Result<Vec<Client>, DomainError> {
            Ok(self.clients.lock().unwrap().clone())
        }

        async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
            Ok(self.clients.lock().unwrap().iter().any(|c| c.id == id))
        }

        async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
            Ok(self
                .clients
                .lock()
                .unwrap()
                .iter()
                .any(|c| c.email == email))
        }

        async fn exists_by_dni(&self, dni: &str) -> Result<bool, DomainError> {
            Ok(self.clients.lock().unwrap().iter().any(|c| c.dni == dni))
        }

        async fn insert(&self, candidate: &NewClient) -> Result<Client, DomainError> {
            let mut last_id = self.last_id.lock().unwrap();
            *last_id += 1;
            let client = Client::from_candidate(*last_id, candidate);
            self.clients.lock().unwrap().push(client.clone());
            Ok(client)
        }

        async fn update(&self, client: &Client) -> Result<Client, DomainError> {
            let mut clients = self.clients.lock().unwrap();
            let existing = clients
                .iter_mut()
                .find(|c| c.id == client.id)
                .ok_or(DomainError::NotFound { id: client.id })?;
            *existing = client.clone();
            Ok(client.clone())
        }

        async fn delete(&self, id: i64) -> Result<bool, DomainError> {
            let mut clients = self.clients.lock().unwrap();
            let before = clients.len();
            clients.retain(|c| c.id != id);
            Ok(clients.len() < before)
        }
    }

    enum AccountsBehavior {
        Accounts(bool),
        Unavailable,
    }

    struct FakeAccounts {
        behavior: AccountsBehavior,
        calls: AtomicUsize,
    }

    impl FakeAccounts {
        fn reporting(has_accounts: bool) -> Arc<Self> {
            Arc::new(Self {
                behavior: AccountsBehavior::Accounts(has_accounts),
                calls: AtomicUsize::new(0),
            })
        }

        fn unavailable() -> Arc<Self> {
            Arc::new(Self {
                behavior: AccountsBehavior::Unavailable,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl AccountsClient for FakeAccounts {
        async fn has_accounts(&self, client_id: i64) -> Result<bool, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behavior {
                AccountsBehavior::Accounts(v) => Ok(v),
                AccountsBehavior::Unavailable => Err(DomainError::DependencyUnavailable(format!(
                    "client {client_id}: connection refused"
                ))),
            }
        }
    }

    fn existing(id: i64, dni: &str, email: &str) -> Client {
        Client {
            id,
            first_name: "Ana".to_string(),
            last_name: "Perez".to_string(),
            email: email.to_string(),
            dni: dni.to_string(),
        }
    }

    fn service(
        repo: Arc<InMemoryRepo>,
        accounts: Arc<FakeAccounts>,
    ) -> ClientService<InMemoryRepo, FakeAccounts> {
        ClientService::new(repo, accounts)
    }

    // ---------- register ----------

    #[tokio::test]
    async fn register_assigns_an_id_on_an_empty_store() {
        let repo = Arc::new(InMemoryRepo::default());
        let svc = service(repo.clone(), FakeAccounts::reporting(false));

        let out = svc
            .register(
                "Ana".to_string(),
                "Perez".to_string(),
                "12345678".to_string(),
                "ana@mail.com".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(out.id, 1);
        assert_eq!(out.first_name, "Ana");
        assert_eq!(out.last_name, "Perez");
        assert_eq!(out.dni, "12345678");
        assert_eq!(out.email, "ana@mail.com");
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn register_duplicate_dni_is_rejected_and_not_persisted() {
        let repo = InMemoryRepo::seeded(vec![existing(1, "12345678", "ana@mail.com")]);
        let svc = service(repo.clone(), FakeAccounts::reporting(false));

        let err = svc
            .register(
                "Luis".to_string(),
                "Gomez".to_string(),
                "12345678".to_string(),
                "luis@mail.com".to_string(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::DuplicateIdentifier { field: "dni" }
        ));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn register_blank_fields_are_rejected_and_not_persisted() {
        let repo = Arc::new(InMemoryRepo::default());
        let svc = service(repo.clone(), FakeAccounts::reporting(false));

        let err = svc
            .register(
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::MissingField));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    // ---------- get / list ----------

    #[tokio::test]
    async fn get_returns_the_stored_record() {
        let repo = InMemoryRepo::seeded(vec![existing(7, "12345678", "ana@mail.com")]);
        let svc = service(repo, FakeAccounts::reporting(false));

        let out = svc.get(7).await.unwrap();
        assert_eq!(out.id, 7);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let svc = service(
            Arc::new(InMemoryRepo::default()),
            FakeAccounts::reporting(false),
        );
        let err = svc.get(7).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { id: 7 }));
    }

    #[tokio::test]
    async fn list_returns_records_in_insertion_order() {
        let repo = InMemoryRepo::seeded(vec![
            existing(1, "12345678", "ana@mail.com"),
            existing(2, "87654321", "luis@mail.com"),
        ]);
        let svc = service(repo, FakeAccounts::reporting(false));

        let out = svc.list().await.unwrap();
        assert_eq!(out.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    // ---------- update ----------

    #[tokio::test]
    async fn update_applies_trimmed_names_and_new_email() {
        let repo = InMemoryRepo::seeded(vec![existing(1, "12345678", "old@mail.com")]);
        let svc = service(repo, FakeAccounts::reporting(false));

        let out = svc
            .update(
                1,
                Some("  Ana Maria ".to_string()),
                Some("Perez".to_string()),
                Some("new@mail.com".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(out.first_name, "Ana Maria");
        assert_eq!(out.last_name, "Perez");
        assert_eq!(out.email, "new@mail.com");
    }

    #[tokio::test]
    async fn update_treats_absent_and_blank_both_as_keep() {
        let repo = InMemoryRepo::seeded(vec![existing(1, "12345678", "ana@mail.com")]);
        let svc = service(repo, FakeAccounts::reporting(false));

        let out = svc
            .update(1, None, Some("   ".to_string()), Some(String::new()))
            .await
            .unwrap();

        assert_eq!(out.first_name, "Ana");
        assert_eq!(out.last_name, "Perez");
        assert_eq!(out.email, "ana@mail.com");
    }

    #[tokio::test]
    async fn update_with_same_email_in_different_case_is_a_no_op() {
        // Case-insensitive equality means no duplicate check and no change,
        // even though the stored record itself owns that address.
        let repo = InMemoryRepo::seeded(vec![existing(1, "12345678", "ana@mail.com")]);
        let svc = service(repo, FakeAccounts::reporting(false));

        let out = svc
            .update(1, None, None, Some("ANA@MAIL.COM".to_string()))
            .await
            .unwrap();

        assert_eq!(out.email, "ana@mail.com");
    }

    #[tokio::test]
    async fn update_to_an_email_owned_by_another_client_is_rejected() {
        let repo = InMemoryRepo::seeded(vec![
            existing(1, "12345678", "ana@mail.com"),
            existing(2, "87654321", "dup@mail.com"),
        ]);
        let svc = service(repo.clone(), FakeAccounts::reporting(false));

        let err = svc
            .update(1, None, None, Some("dup@mail.com".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::DuplicateIdentifier { field: "email" }
        ));
        // Client 1 unchanged.
        assert_eq!(repo.find_by_id(1).await.unwrap().unwrap().email, "ana@mail.com");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let svc = service(
            Arc::new(InMemoryRepo::default()),
            FakeAccounts::reporting(false),
        );
        let err = svc
            .update(99, Some("A".to_string()), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { id: 99 }));
    }

    // ---------- delete ----------

    #[tokio::test]
    async fn delete_removes_the_record_when_no_accounts_exist() {
        let repo = InMemoryRepo::seeded(vec![existing(10, "12345678", "ana@mail.com")]);
        let accounts = FakeAccounts::reporting(false);
        let svc = service(repo.clone(), accounts.clone());

        svc.delete(10).await.unwrap();

        assert_eq!(accounts.calls.load(Ordering::SeqCst), 1);
        let err = svc.get(10).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { id: 10 }));
    }

    #[tokio::test]
    async fn delete_is_blocked_while_the_client_owns_accounts() {
        let repo = InMemoryRepo::seeded(vec![existing(10, "12345678", "ana@mail.com")]);
        let svc = service(repo.clone(), FakeAccounts::reporting(true));

        let err = svc.delete(10).await.unwrap_err();

        assert!(matches!(err, DomainError::HasDependents { id: 10 }));
        // Record still fetchable.
        assert!(svc.get(10).await.is_ok());
    }

    #[tokio::test]
    async fn delete_unknown_id_skips_the_accounts_check() {
        let accounts = FakeAccounts::reporting(false);
        let svc = service(Arc::new(InMemoryRepo::default()), accounts.clone());

        let err = svc.delete(10).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { id: 10 }));
        assert_eq!(accounts.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn delete_aborts_when_the_dependency_check_fails() {
        let repo = InMemoryRepo::seeded(vec![existing(10, "12345678", "ana@mail.com")]);
        let svc = service(repo.clone(), FakeAccounts::unavailable());

        let err = svc.delete(10).await.unwrap_err();

        assert!(matches!(err, DomainError::DependencyUnavailable(_)));
        // Deletion must not silently proceed.
        assert!(svc.get(10).await.is_ok());
    }
}
