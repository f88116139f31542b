use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{get_current_identity, login_user, logout_user};
use crate::state::AppState;

/// Public routes: the caller has no token yet.
pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_user))
        .route("/logout", post(logout_user))
}

/// Mounted under `/api`, behind `require_auth`.
pub fn init_identity_router() -> Router<AppState> {
    Router::new().route("/me", get(get_current_identity))
}
