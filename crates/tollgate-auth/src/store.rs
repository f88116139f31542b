//! Credential store collaborator.
//!
//! The authenticator only needs to look a user up by username and check a
//! password against the stored hash. Production uses the Postgres store in
//! `tollgate-db`; [`InMemoryCredentialStore`] backs local runs and tests.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tollgate_core::{AppError, hash_password_with_cost, verify_password};
use tollgate_models::{CredentialRecord, Role, normalize_username};
use uuid::Uuid;

#[async_trait]
pub trait CredentialStore: std::fmt::Debug + Send + Sync {
    /// `username` is already normalized by the caller.
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<CredentialRecord>>;

    /// Compares a candidate password against the record's hash.
    ///
    /// bcrypt is CPU-bound, so the default runs it off the async workers.
    async fn verify_password(
        &self,
        record: &CredentialRecord,
        password: &str,
    ) -> anyhow::Result<bool> {
        let hash = record.password_hash.clone();
        let password = password.to_string();

        tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await?
            .map_err(AppError::into_inner)
    }

    /// Called after a successful login.
    async fn record_login(&self, _record: &CredentialRecord) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    users: RwLock<HashMap<String, CredentialRecord>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding `admin/admin` (admin) and `user/user` (user).
    ///
    /// For local development only.
    pub fn with_demo_users(cost: u32) -> Result<Self, AppError> {
        let store = Self::new();
        for (username, role) in [("admin", Role::Admin), ("user", Role::User)] {
            let hash = hash_password_with_cost(username, cost)?;
            store.insert(CredentialRecord::new(
                Uuid::new_v4().to_string(),
                username,
                hash,
                role,
            ));
        }
        Ok(store)
    }

    /// Adds or replaces a record, keyed by its normalized username.
    pub fn insert(&self, record: CredentialRecord) {
        let key = normalize_username(&record.username);
        self.users
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key, record);
    }

    pub fn len(&self) -> usize {
        self.users.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<CredentialRecord>> {
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        Ok(users.get(&normalize_username(username)).cloned())
    }

    async fn record_login(&self, record: &CredentialRecord) -> anyhow::Result<()> {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        if let Some(stored) = users.get_mut(&record.username) {
            stored.last_login_at = Some(chrono::Utc::now());
        }
        Ok(())
    }
}
