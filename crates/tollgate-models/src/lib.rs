//! # Tollgate Models
//!
//! Domain models and DTOs shared between the server, the credential stores
//! and the CLI.
//!
//! - [`roles`]: the fixed role enumeration carried in tokens
//! - [`credentials`]: the stored credential record
//! - [`auth`]: login request/response bodies

pub mod auth;
pub mod credentials;
pub mod roles;

// Re-export commonly used types at crate root
pub use auth::{LoginRequest, LoginResponse};
pub use credentials::{CredentialRecord, MIN_PASSWORD_LENGTH, normalize_username};
pub use roles::{Role, RoleParseError};
