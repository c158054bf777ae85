//! PostgreSQL implementation of ClientRepository

use async_trait::async_trait;
use sqlx::PgPool;

use clientsvc::{Client, ClientRepository, DomainError, NewClient};

/// PostgreSQL implementation of ClientRepository
pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ClientRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    dni: String,
}

impl From<ClientRow> for Client {
    fn from(row: ClientRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            dni: row.dni,
        }
    }
}

/// Surface unique-index violations as duplicate identifiers so the race
/// window between the validator's pre-check and the insert stays closed.
fn map_db_err(e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            let field = if db.constraint() == Some("idx_clients_dni_unique") {
                "dni"
            } else {
                "email"
            };
            return DomainError::DuplicateIdentifier { field };
        }
    }
    DomainError::Repository(e.to_string())
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, DomainError> {
        let row = sqlx::query_as::<_, ClientRow>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Client>, DomainError> {
        let row = sqlx::query_as::<_, ClientRow>("SELECT * FROM clients WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_dni(&self, dni: &str) -> Result<Option<Client>, DomainError> {
        let row = sqlx::query_as::<_, ClientRow>("SELECT * FROM clients WHERE dni = $1")
            .bind(dni)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Client>, DomainError> {
        // Insertion order: BIGSERIAL ids are monotonic.
        let rows = sqlx::query_as::<_, ClientRow>("SELECT * FROM clients ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_err)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM clients WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_err)
    }

    async fn exists_by_dni(&self, dni: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM clients WHERE dni = $1)")
            .bind(dni)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_err)
    }

    async fn insert(&self, candidate: &NewClient) -> Result<Client, DomainError> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            INSERT INTO clients (first_name, last_name, email, dni)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&candidate.first_name)
        .bind(&candidate.last_name)
        .bind(&candidate.email)
        .bind(&candidate.dni)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_err)?;

        Ok(row.into())
    }

    async fn update(&self, client: &Client) -> Result<Client, DomainError> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            UPDATE clients
            SET first_name = $2, last_name = $3, email = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(client.id)
        .bind(&client.first_name)
        .bind(&client.last_name)
        .bind(&client.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?
        .ok_or(DomainError::NotFound { id: client.id })?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected() > 0)
    }
}
