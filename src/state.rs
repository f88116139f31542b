use std::sync::Arc;

use anyhow::Context;
use tollgate_auth::{Authenticator, CredentialStore, InMemoryCredentialStore};
use tollgate_config::{CookieConfig, CorsConfig, JwtConfig, StoreConfig};
use tollgate_core::{AppError, DEFAULT_HASH_COST};
use tollgate_db::{PgCredentialStore, init_db_pool, run_migrations};
use tollgate_observability::PrometheusHandle;

/// Shared by every handler. Built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cookie_config: CookieConfig,
    pub cors_config: CorsConfig,
    pub authenticator: Arc<Authenticator>,
    /// `/metrics` is only routed when this is set.
    pub metrics_handle: Option<PrometheusHandle>,
}

/// Loads configuration from the environment and picks the credential store.
///
/// Fails instead of falling back when required JWT settings are missing.
pub async fn init_app_state(metrics_handle: Option<PrometheusHandle>) -> anyhow::Result<AppState> {
    let jwt_config = JwtConfig::from_env()?;
    let cookie_config = CookieConfig::from_env()?;
    let cors_config = CorsConfig::from_env();
    let store_config = StoreConfig::from_env()?;

    let store = init_credential_store(&store_config).await?;
    let authenticator = Authenticator::new(store).map_err(AppError::into_inner)?;

    Ok(AppState {
        jwt_config,
        cookie_config,
        cors_config,
        authenticator: Arc::new(authenticator),
        metrics_handle,
    })
}

async fn init_credential_store(config: &StoreConfig) -> anyhow::Result<Arc<dyn CredentialStore>> {
    if let Some(database_url) = &config.database_url {
        let pool = init_db_pool(database_url)
            .await
            .context("Failed to connect to database")?;
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Using Postgres credential store");
        return Ok(Arc::new(PgCredentialStore::new(pool)));
    }

    if config.seed_demo_users {
        tracing::warn!("Seeding demo users admin/admin and user/user; do not use in production");
        let store = InMemoryCredentialStore::with_demo_users(DEFAULT_HASH_COST)
            .map_err(AppError::into_inner)?;
        return Ok(Arc::new(store));
    }

    tracing::warn!("DATABASE_URL is not set; using an empty in-memory credential store");
    Ok(Arc::new(InMemoryCredentialStore::new()))
}
