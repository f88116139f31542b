use anyhow::anyhow;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware, routing::get};
use tollgate_core::AppError;
use tollgate_observability::{logging_middleware, metrics_middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::middleware::auth::require_auth;
use crate::modules::auth::router::{init_auth_router, init_identity_router};
use crate::state::AppState;

async fn route_not_found() -> AppError {
    AppError::not_found(anyhow!("Route not found"))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

/// Builds the application router.
///
/// `/login`, `/logout` and the docs are public. Everything under `/api`,
/// including paths with no route, sits behind [`require_auth`].
pub fn init_router(state: AppState) -> Router {
    let api = init_identity_router()
        .fallback(route_not_found)
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(init_auth_router())
        .nest("/api", api);

    if let Some(handle) = state.metrics_handle.clone() {
        router = router.route("/metrics", get(move || async move { handle.render() }));
    }

    router
        .fallback(route_not_found)
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
