use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::users::dtos::UserProfileDto;
use crate::features::users::models::UserRole;

/// Request DTO for registration.
///
/// The username pattern ([`crate::shared::validation::USERNAME_REGEX`])
/// is checked in the service alongside the uniqueness lookups.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    #[validate(length(min = 3, max = 150, message = "Username must be 3-150 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,

    /// Role chosen at registration; immutable afterwards
    pub role: UserRole,

    #[validate(length(max = 15, message = "Phone must not exceed 15 characters"))]
    pub phone: Option<String>,
}

/// Request DTO for login
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response DTO for successful registration or login
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseDto {
    pub token: String,
    pub user: UserProfileDto,
    /// Role-resolved post-auth landing target for the caller
    pub redirect: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_dto() -> RegisterDto {
        RegisterDto {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "correct-horse".to_string(),
            role: UserRole::Customer,
            phone: None,
        }
    }

    #[test]
    fn test_register_dto_valid() {
        assert!(register_dto().validate().is_ok());
    }

    #[test]
    fn test_register_dto_rejects_bad_email() {
        let mut dto = register_dto();
        dto.email = "not-an-email".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_register_dto_rejects_short_password() {
        let mut dto = register_dto();
        dto.password = "short".to_string();
        assert!(dto.validate().is_err());
    }
}
