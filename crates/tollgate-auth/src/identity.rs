use serde::{Deserialize, Serialize};
use tollgate_models::Role;
use utoipa::ToSchema;

/// Who is making the current request.
///
/// Only the verifier constructs one of these from request data; handlers
/// receive it through the request extensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IdentityContext {
    pub subject: String,
    #[schema(example = "admin")]
    pub username: String,
    pub role: Role,
}
