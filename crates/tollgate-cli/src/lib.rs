//! # Tollgate CLI
//!
//! Input checks shared by the `tollgate-cli` binary.

use std::str::FromStr;

use tollgate_models::{MIN_PASSWORD_LENGTH, Role};

/// Rejects passwords shorter than [`MIN_PASSWORD_LENGTH`] or made only of whitespace.
pub fn validate_new_password(password: &str) -> Result<(), String> {
    if password.trim().is_empty() {
        return Err("Password must not be blank".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        ));
    }
    Ok(())
}

/// `clap` value parser for role arguments.
pub fn parse_role(value: &str) -> Result<Role, String> {
    Role::from_str(value).map_err(|_| {
        let known: Vec<&str> = Role::ALL.iter().map(Role::as_str).collect();
        format!("unknown role `{value}` (expected one of: {})", known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_length() {
        assert!(validate_new_password("short").is_err());
        assert!(validate_new_password("        ").is_err());
        assert!(validate_new_password("eight-ch").is_ok());
    }

    #[test]
    fn test_parse_role() {
        assert_eq!(parse_role("dube-admin"), Ok(Role::DubeAdmin));

        let err = parse_role("owner").unwrap_err();
        assert!(err.contains("owner"));
        assert!(err.contains("wfp-viewer"));
    }
}
