use tollgate_auth::{AuthErrorBody, IdentityContext};
use tollgate_config::cookie::TOKEN_COOKIE_NAME;
use tollgate_core::ErrorResponse;
use tollgate_models::{LoginRequest, LoginResponse, Role};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::logout_user,
        crate::modules::auth::controller::get_current_identity,
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            IdentityContext,
            Role,
            AuthErrorBody,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Credential login and cookie handling"),
        (name = "Identity", description = "Endpoints behind token verification")
    ),
    info(
        title = "Tollgate API",
        version = "0.1.0",
        description = "Stateless bearer-token authentication: credential login issuing signed, expiring tokens and verification of those tokens on every protected request.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(TOKEN_COOKIE_NAME))),
            );
        }
    }
}
