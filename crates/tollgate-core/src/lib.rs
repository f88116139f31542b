//! # Tollgate Core
//!
//! Core types shared by every Tollgate crate:
//!
//! - [`errors`]: the generic HTTP error used outside the authentication flow
//! - [`password`]: bcrypt hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use tollgate_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("correct horse battery staple")?;
//! assert!(verify_password("correct horse battery staple", &hash)?);
//!
//! let error = AppError::not_found(anyhow::anyhow!("Route not found"));
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse};
pub use password::{DEFAULT_HASH_COST, hash_password, hash_password_with_cost, verify_password};
