use tollgate_auth::{AuthError, Authenticator, LoginOutcome};
use tollgate_config::JwtConfig;
use tollgate_models::LoginRequest;
use tollgate_observability::{track_login_failure, track_login_success, track_token_issued};
use tracing::instrument;

pub struct AuthService;

impl AuthService {
    /// Checks the credentials and issues a token.
    ///
    /// The username is logged, the password never is.
    #[instrument(skip_all, fields(username = %dto.username))]
    pub async fn login_user(
        authenticator: &Authenticator,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginOutcome, AuthError> {
        match authenticator
            .authenticate(&dto.username, &dto.password, jwt_config)
            .await
        {
            Ok(outcome) => {
                track_login_success(outcome.identity.role.as_str());
                track_token_issued();
                tracing::info!(
                    subject = %outcome.identity.subject,
                    role = %outcome.identity.role,
                    "Login succeeded"
                );
                Ok(outcome)
            }
            Err(err) => {
                track_login_failure(err.code());
                tracing::warn!(code = err.code(), "Login failed");
                Err(err)
            }
        }
    }
}
