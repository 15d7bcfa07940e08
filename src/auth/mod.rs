pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_dummy_password, verify_password};
pub use token::{Claims, JwtKeys};

/// Represents the payload for a user login request.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// User's email address.
    #[serde(default)]
    #[validate(email)]
    pub email: String,
    /// User's password. Only checked for presence here; bcrypt does the rest.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub password: String,
}

/// Payload of a successful login.
/// Contains the JWT access token and the ID of the authenticated user.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The JWT for session authentication.
    pub token: String,
    /// The unique identifier of the authenticated user.
    pub user_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_login_request_validation() {
        let valid_login = LoginRequest {
            email: "anonim@example.com".to_string(),
            password: "anonim123".to_string(),
        };
        assert!(valid_login.validate().is_ok());

        let invalid_email_login = LoginRequest {
            email: "anonim".to_string(),
            password: "anonim123".to_string(),
        };
        assert!(invalid_email_login.validate().is_err());

        let empty_password_login = LoginRequest {
            email: "anonim@example.com".to_string(),
            password: "".to_string(),
        };
        assert!(empty_password_login.validate().is_err());
    }
}
