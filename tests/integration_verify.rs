mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use common::{body_json, login_token, setup_test_app, test_jwt_config};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;
use tollgate_auth::create_access_token_at;
use tollgate_config::JwtConfig;
use tollgate_models::Role;
use tower::ServiceExt;

fn me_with_bearer(token: &str) -> Request<Body> {
    Request::builder()
        .uri("/api/me")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

fn me_with_cookie(token: &str) -> Request<Body> {
    Request::builder()
        .uri("/api/me")
        .header(header::COOKIE, format!("token={token}"))
        .body(Body::empty())
        .unwrap()
}

fn sign_payload(payload: serde_json::Value, config: &JwtConfig) -> String {
    encode(
        &Header::new(config.algorithm),
        &payload,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .unwrap()
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

#[tokio::test]
async fn test_login_then_me() {
    let app = setup_test_app();
    let token = login_token(&app, "admin", "admin").await;

    let response = app.oneshot(me_with_bearer(&token)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["username"], "admin");
    assert_eq!(body["role"], "admin");
    assert!(body["subject"].as_str().is_some_and(|s| !s.is_empty()));
}

#[tokio::test]
async fn test_me_with_cookie() {
    let app = setup_test_app();
    let token = login_token(&app, "user", "user").await;

    let response = app.oneshot(me_with_cookie(&token)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["username"], "user");
    assert_eq!(body["role"], "user");
}

#[tokio::test]
async fn test_header_takes_precedence_over_cookie() {
    let app = setup_test_app();
    let token = login_token(&app, "user", "user").await;

    let request = Request::builder()
        .uri("/api/me")
        .header(header::AUTHORIZATION, "Bearer not-a-real-token")
        .header(header::COOKIE, format!("token={token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["error"], "MALFORMED_TOKEN");
}

#[tokio::test]
async fn test_non_bearer_header_falls_back_to_cookie() {
    let app = setup_test_app();
    let token = login_token(&app, "admin", "admin").await;

    let request = Request::builder()
        .uri("/api/me")
        .header(header::AUTHORIZATION, "Basic YWRtaW46YWRtaW4=")
        .header(header::COOKIE, format!("token={token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_token() {
    let app = setup_test_app();

    let request = Request::builder()
        .uri("/api/me")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "Bearer");
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "MISSING_TOKEN");
    assert_eq!(
        body["message"],
        "Authorization header or cookie with Bearer token required"
    );
}

#[tokio::test]
async fn test_expired_token() {
    let app = setup_test_app();
    let config = test_jwt_config();
    let issued =
        create_access_token_at("1", "admin", Role::Admin, &config, now() - 2 * 3600).unwrap();

    let response = app.oneshot(me_with_bearer(&issued.token)).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["error"], "TOKEN_EXPIRED");
    assert_eq!(body["message"], "Token expired, please reauthenticate");
    assert_eq!(body["renew_url"], "/api/refresh-token");
}

#[tokio::test]
async fn test_random_string_token() {
    let app = setup_test_app();

    let response = app.oneshot(me_with_bearer("abc123")).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["error"], "MALFORMED_TOKEN");
    assert_eq!(body["message"], "Invalid token format");
    assert!(body.get("renew_url").is_none());
}

#[tokio::test]
async fn test_token_signed_with_other_secret() {
    let app = setup_test_app();
    let other = JwtConfig {
        secret: "some-other-service-secret-of-32-bytes".to_string(),
        ..test_jwt_config()
    };
    let issued = create_access_token_at("1", "admin", Role::Admin, &other, now()).unwrap();

    let response = app.oneshot(me_with_bearer(&issued.token)).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "MALFORMED_TOKEN");
}

#[tokio::test]
async fn test_unsigned_token() {
    let app = setup_test_app();
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        json!({
            "sub": "1",
            "username": "admin",
            "role": "admin",
            "iss": "tollgate-api",
            "aud": "tollgate-clients",
            "exp": now() + 3600,
        })
        .to_string(),
    );

    let response = app
        .oneshot(me_with_bearer(&format!("{header}.{payload}.")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "MALFORMED_TOKEN");
}

#[tokio::test]
async fn test_wrong_audience() {
    let app = setup_test_app();
    let config = test_jwt_config();
    let token = sign_payload(
        json!({
            "sub": "1",
            "username": "admin",
            "role": "admin",
            "iss": "tollgate-api",
            "aud": "someone-else",
            "exp": now() + 3600,
        }),
        &config,
    );

    let response = app.oneshot(me_with_bearer(&token)).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "MALFORMED_TOKEN");
}

#[tokio::test]
async fn test_token_without_subject() {
    let app = setup_test_app();
    let config = test_jwt_config();
    let token = sign_payload(
        json!({
            "username": "admin",
            "role": "admin",
            "iss": "tollgate-api",
            "aud": "tollgate-clients",
            "exp": now() + 3600,
        }),
        &config,
    );

    let response = app.oneshot(me_with_bearer(&token)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "INVALID_PAYLOAD");
    assert_eq!(body["message"], "Token payload is invalid");
}

#[tokio::test]
async fn test_unknown_api_route_is_gated() {
    let app = setup_test_app();

    let request = Request::builder()
        .uri("/api/does-not-exist")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let token = login_token(&app, "admin", "admin").await;
    let request = Request::builder()
        .uri("/api/does-not-exist")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_public_route() {
    let app = setup_test_app();

    let request = Request::builder()
        .uri("/nowhere")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Route not found");
}

#[tokio::test]
async fn test_openapi_document_is_public() {
    let app = setup_test_app();

    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"]["/api/me"].is_object());
}
