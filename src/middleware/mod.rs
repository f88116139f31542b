//! Request authentication.
//!
//! - [`auth::require_auth`]: layer that gates a router; every request must
//!   carry a valid token or it is answered with an auth error
//! - [`auth::AuthUser`]: extractor giving handlers the verified identity
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>` or the `token` cookie
//! 2. `require_auth` verifies the token and stores the `IdentityContext` in
//!    the request extensions
//! 3. Handlers take `AuthUser` to read it
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn whoami(AuthUser(identity): AuthUser) -> String {
//!     format!("{} ({})", identity.username, identity.role)
//! }
//! ```

pub mod auth;
