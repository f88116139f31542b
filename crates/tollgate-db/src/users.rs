use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tollgate_auth::CredentialStore;
use tollgate_models::{CredentialRecord, Role, normalize_username};
use uuid::Uuid;

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    password_hash: String,
    role: String,
    is_active: bool,
    first_name: Option<String>,
    last_name: Option<String>,
    last_login_at: Option<DateTime<Utc>>,
}

impl TryFrom<UserRow> for CredentialRecord {
    type Error = anyhow::Error;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = Role::from_str(&row.role)?;

        Ok(CredentialRecord {
            id: row.id.to_string(),
            username: row.username,
            password_hash: row.password_hash,
            role,
            is_active: row.is_active,
            first_name: row.first_name,
            last_name: row.last_name,
            last_login_at: row.last_login_at,
        })
    }
}

/// [`CredentialStore`] over the `users` table.
#[derive(Debug, Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<CredentialRecord>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password_hash, role, is_active,
                   first_name, last_name, last_login_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(normalize_username(username))
        .fetch_optional(&self.pool)
        .await?;

        row.map(CredentialRecord::try_from).transpose()
    }

    async fn record_login(&self, record: &CredentialRecord) -> anyhow::Result<()> {
        let id = Uuid::parse_str(&record.id)?;

        sqlx::query("UPDATE users SET last_login_at = NOW(), updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Input for [`create_user`]. `password_hash` must already be a bcrypt hash.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

pub async fn create_user(pool: &PgPool, user: NewUser) -> anyhow::Result<CredentialRecord> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (username, password_hash, role, first_name, last_name)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, username, password_hash, role, is_active,
                  first_name, last_name, last_login_at
        "#,
    )
    .bind(normalize_username(&user.username))
    .bind(&user.password_hash)
    .bind(user.role.as_str())
    .bind(&user.first_name)
    .bind(&user.last_name)
    .fetch_one(pool)
    .await?;

    let record = CredentialRecord::try_from(row)?;
    tracing::info!(user_id = %record.id, role = %record.role, "User created");
    Ok(record)
}
