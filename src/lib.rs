//! # Tollgate API
//!
//! Stateless bearer-token authentication for an HTTP API, built with Axum.
//!
//! A login endpoint checks a username and password against a credential
//! store and issues a signed, expiring token. Every request under `/api` must
//! then present that token, either as `Authorization: Bearer <token>` or as
//! the `token` cookie, and is rejected with a classified error when it does not
//! verify.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # require_auth layer and AuthUser extractor
//! ├── modules/
//! │   └── auth/        # login, logout, /api/me
//! ├── docs.rs          # OpenAPI document
//! ├── router.rs        # route tree and layers
//! ├── state.rs         # shared application state
//! └── validator.rs     # ValidatedJson extractor
//!
//! crates/
//! ├── tollgate-auth/          # token issue/verify, extraction, authenticator
//! ├── tollgate-config/        # environment configuration
//! ├── tollgate-core/          # AppError, password hashing
//! ├── tollgate-db/            # Postgres pool and credential store
//! ├── tollgate-models/        # roles, credential records, DTOs
//! ├── tollgate-observability/ # tracing and metrics
//! └── tollgate-cli/           # admin CLI
//! ```
//!
//! ## Error Responses
//!
//! | Code | Status |
//! |------|--------|
//! | `INVALID_CREDENTIALS` | 401 |
//! | `MISSING_TOKEN` | 401 |
//! | `MALFORMED_TOKEN` | 403 |
//! | `TOKEN_EXPIRED` | 403 (with `renew_url`) |
//! | `INVALID_PAYLOAD` | 400 |
//! | `SERVER_ERROR` | 500 |
//!
//! ## Quick Start
//!
//! ```bash
//! JWT_SECRET=change-me-to-32-random-bytes-or-more
//! JWT_ISSUER=tollgate-api
//! JWT_AUDIENCE=tollgate-clients
//! SEED_DEMO_USERS=true
//! AUTH_COOKIE_SECURE=false
//! cargo run
//! ```
//!
//! Swagger UI is served at `http://localhost:4000/swagger-ui`.

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use tollgate_auth;
pub use tollgate_config;
pub use tollgate_core;
pub use tollgate_db;
pub use tollgate_models;
