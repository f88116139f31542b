//! # Tollgate DB
//!
//! Postgres connection pool and the credential store backed by the `users`
//! table.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tollgate_db::{PgCredentialStore, init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&database_url).await?;
//! run_migrations(&pool).await?;
//! let store = Arc::new(PgCredentialStore::new(pool));
//! ```

pub mod users;

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub use sqlx::PgPool;
pub use users::{NewUser, PgCredentialStore, create_user};

const MAX_CONNECTIONS: u32 = 10;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connects to Postgres.
///
/// Call once at startup and share the pool; it is cheap to clone.
pub async fn init_db_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
