use crate::error::AppError;
use bcrypt::{hash, verify};
use std::sync::OnceLock;

const BCRYPT_COST: u32 = 12;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, BCRYPT_COST)
        .map_err(|e| AppError::InternalServerError(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, AppError> {
    verify(password, hashed_password)
        .map_err(|e| AppError::InternalServerError(format!("Failed to verify password: {}", e)))
}

/// Hash compared against when the account does not exist, so a login for an
/// unknown email costs the same bcrypt work as a wrong password.
fn dummy_hash() -> Option<&'static str> {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();
    DUMMY_HASH
        .get_or_init(|| hash("not-a-real-account", BCRYPT_COST).ok())
        .as_deref()
}

/// Runs a full bcrypt verification whose outcome is discarded.
pub fn verify_dummy_password(password: &str) {
    if let Some(dummy) = dummy_hash() {
        let _ = verify(password, dummy);
    }
}
