//! Role tags.
//!
//! The set is closed: a token whose `role` claim is not one of these values
//! is rejected by the verifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Admin,
    DubeAdmin,
    WfpAdmin,
    DubeViewer,
    WfpViewer,
    #[default]
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role `{0}`")]
pub struct RoleParseError(pub String);

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Admin,
        Role::DubeAdmin,
        Role::WfpAdmin,
        Role::DubeViewer,
        Role::WfpViewer,
        Role::User,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::DubeAdmin => "dube-admin",
            Role::WfpAdmin => "wfp-admin",
            Role::DubeViewer => "dube-viewer",
            Role::WfpViewer => "wfp-viewer",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| RoleParseError(s.to_string()))
    }
}
