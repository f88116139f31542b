//! bcrypt password hashing.
//!
//! Hashes are salted per call, so hashing the same password twice yields
//! different strings that both verify.

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::errors::AppError;

/// bcrypt cost used for stored hashes.
pub const DEFAULT_HASH_COST: u32 = DEFAULT_COST;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash_password_with_cost(password, DEFAULT_HASH_COST)
}

/// Hashes with an explicit bcrypt cost (4..=31).
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost).map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

/// Returns `Ok(false)` on mismatch and `Err` only when `hash` is not a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}
