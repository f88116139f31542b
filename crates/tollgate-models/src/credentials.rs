//! Stored credential records.
//!
//! A [`CredentialRecord`] holds a bcrypt hash, never a plaintext password. It
//! deliberately does not implement `Serialize`, and its `Debug` output hides
//! the hash, so a record cannot leak through a response body or a log line.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::roles::Role;

/// Minimum length accepted when a password is set.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Usernames are stored and looked up trimmed and lower-cased.
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

#[derive(Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    /// Subject identifier placed in the `sub` claim.
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub is_active: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl CredentialRecord {
    /// Creates an active record with no profile fields.
    pub fn new(
        id: impl Into<String>,
        username: &str,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            username: normalize_username(username),
            password_hash: password_hash.into(),
            role,
            is_active: true,
            first_name: None,
            last_name: None,
            last_login_at: None,
        }
    }

    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"[redacted]")
            .field("role", &self.role)
            .field("is_active", &self.is_active)
            .field("last_login_at", &self.last_login_at)
            .finish()
    }
}
