use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use jsonwebtoken::Algorithm;
use serde_json::json;
use tollgate::router::init_router;
use tollgate::state::AppState;
use tollgate_auth::{Authenticator, InMemoryCredentialStore};
use tollgate_config::{CookieConfig, CorsConfig, JwtConfig};
use tollgate_core::hash_password_with_cost;
use tollgate_models::{CredentialRecord, Role};
use tower::ServiceExt;

/// Lowest bcrypt cost; keeps the suite fast.
pub const TEST_COST: u32 = 4;

#[allow(dead_code)]
pub const INACTIVE_USERNAME: &str = "retired";
#[allow(dead_code)]
pub const INACTIVE_PASSWORD: &str = "retired-password";

#[allow(dead_code)]
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-key-32-bytes-min".to_string(),
        access_token_expiry: 3600,
        issuer: "tollgate-api".to_string(),
        audience: "tollgate-clients".to_string(),
        algorithm: Algorithm::HS256,
        renew_url: "/api/refresh-token".to_string(),
    }
}

/// Demo users `admin/admin` and `user/user` plus one deactivated account.
pub fn test_state() -> AppState {
    let store = InMemoryCredentialStore::with_demo_users(TEST_COST).unwrap();
    let hash = hash_password_with_cost(INACTIVE_PASSWORD, TEST_COST).unwrap();
    store.insert(
        CredentialRecord::new("inactive-1", INACTIVE_USERNAME, hash, Role::WfpAdmin).deactivated(),
    );

    AppState {
        jwt_config: test_jwt_config(),
        cookie_config: CookieConfig::default(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        authenticator: Arc::new(Authenticator::with_hash_cost(Arc::new(store), TEST_COST).unwrap()),
        metrics_handle: None,
    }
}

pub fn setup_test_app() -> Router {
    init_router(test_state())
}

#[allow(dead_code)]
pub fn login_request(username: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "username": username,
                "password": password
            }))
            .unwrap(),
        ))
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Logs in through the router and returns the issued token.
#[allow(dead_code)]
pub async fn login_token(app: &Router, username: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(login_request(username, password))
        .await
        .unwrap();
    let body = body_json(response).await;
    body["token"].as_str().unwrap().to_string()
}
