//! Username/password login.

use std::sync::Arc;

use chrono::Utc;
use tollgate_config::JwtConfig;
use tollgate_core::{AppError, hash_password, hash_password_with_cost, verify_password};
use tollgate_models::{CredentialRecord, normalize_username};

use crate::claims::IssuedToken;
use crate::error::AuthError;
use crate::identity::IdentityContext;
use crate::jwt::create_access_token_at;
use crate::store::CredentialStore;

/// A successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub identity: IdentityContext,
    pub token: IssuedToken,
}

/// Checks credentials against a [`CredentialStore`] and issues tokens.
///
/// Unknown users are still run through a bcrypt comparison against a
/// throwaway hash, so a miss costs about as much as a wrong password.
#[derive(Debug, Clone)]
pub struct Authenticator {
    store: Arc<dyn CredentialStore>,
    dummy_hash: String,
}

impl Authenticator {
    pub fn new(store: Arc<dyn CredentialStore>) -> Result<Self, AppError> {
        Ok(Self {
            store,
            dummy_hash: hash_password("tollgate-unknown-user")?,
        })
    }

    /// The dummy hash cost should match the cost of stored hashes.
    pub fn with_hash_cost(store: Arc<dyn CredentialStore>, cost: u32) -> Result<Self, AppError> {
        Ok(Self {
            store,
            dummy_hash: hash_password_with_cost("tollgate-unknown-user", cost)?,
        })
    }

    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
        jwt_config: &JwtConfig,
    ) -> Result<LoginOutcome, AuthError> {
        self.authenticate_at(username, password, jwt_config, Utc::now().timestamp())
            .await
    }

    pub async fn authenticate_at(
        &self,
        username: &str,
        password: &str,
        jwt_config: &JwtConfig,
        now: i64,
    ) -> Result<LoginOutcome, AuthError> {
        let username = normalize_username(username);

        let record = self.store.find_by_username(&username).await.map_err(|e| {
            tracing::error!(error = %e, "Credential lookup failed");
            AuthError::ServerError
        })?;

        let Some(record) = record else {
            self.burn_dummy_comparison(password).await;
            return Err(AuthError::InvalidCredentials);
        };

        let matches = self
            .store
            .verify_password(&record, password)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, user_id = %record.id, "Password verification failed");
                AuthError::ServerError
            })?;

        if !matches || !record.is_active {
            return Err(AuthError::InvalidCredentials);
        }

        let token = create_access_token_at(
            &record.id,
            &record.username,
            record.role,
            jwt_config,
            now,
        )?;

        if let Err(e) = self.store.record_login(&record).await {
            tracing::warn!(error = %e, user_id = %record.id, "Failed to record login time");
        }

        Ok(LoginOutcome {
            identity: identity_of(&record),
            token,
        })
    }

    async fn burn_dummy_comparison(&self, password: &str) {
        let hash = self.dummy_hash.clone();
        let password = password.to_string();
        let _ = tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await;
    }
}

fn identity_of(record: &CredentialRecord) -> IdentityContext {
    IdentityContext {
        subject: record.id.clone(),
        username: record.username.clone(),
        role: record.role,
    }
}
