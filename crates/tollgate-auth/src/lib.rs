//! # Tollgate Auth
//!
//! Stateless bearer-token authentication.
//!
//! This crate provides:
//!
//! - [`claims`]: the signed claim set
//! - [`identity`]: the verified, request-scoped identity
//! - [`error`]: the authentication error taxonomy and its HTTP rendering
//! - [`jwt`]: token issuance and the single authoritative verifier
//! - [`extract`]: where a request's token is read from
//! - [`store`]: the credential store collaborator and an in-memory implementation
//! - [`authenticator`]: username/password login producing a token
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tollgate_auth::{Authenticator, InMemoryCredentialStore, extract_token, verify_token};
//! use tollgate_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let store = Arc::new(InMemoryCredentialStore::new());
//! let authenticator = Authenticator::new(store)?;
//!
//! let outcome = authenticator.authenticate("admin", "admin", &config).await?;
//!
//! // Later, on a protected request
//! let token = extract_token(request.headers())?;
//! let identity = verify_token(&token.value, &config)?;
//! println!("{} is a {}", identity.username, identity.role);
//! ```

pub mod authenticator;
pub mod claims;
pub mod error;
pub mod extract;
pub mod identity;
pub mod jwt;
pub mod store;

// Re-export commonly used types at crate root
pub use authenticator::{Authenticator, LoginOutcome};
pub use claims::{IssuedToken, TokenClaims};
pub use error::{AuthError, AuthErrorBody};
pub use extract::{ExtractedToken, TokenSource, extract_token};
pub use identity::IdentityContext;
pub use jwt::{create_access_token, create_access_token_at, verify_token, verify_token_at};
pub use store::{CredentialStore, InMemoryCredentialStore};
