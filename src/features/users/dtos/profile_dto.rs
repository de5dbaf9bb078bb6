use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::users::models::{User, UserRole};

/// Response DTO for a user profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfileDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            role: u.role,
            phone: u.phone,
            address: u.address,
            profile_image: u.profile_image,
            created_at: u.created_at,
        }
    }
}

/// Request DTO for updating own profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 15, message = "Phone must not exceed 15 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 2000, message = "Address must not exceed 2000 characters"))]
    pub address: Option<String>,

    /// Reference to an externally stored image; upload handling is not
    /// part of this service
    #[validate(length(max = 500, message = "Image reference must not exceed 500 characters"))]
    pub profile_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_profile_rejects_bad_email() {
        let dto = UpdateProfileDto {
            email: Some("not-an-email".to_string()),
            phone: None,
            address: None,
            profile_image: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_profile_accepts_partial_update() {
        let dto = UpdateProfileDto {
            email: None,
            phone: Some("08123456789".to_string()),
            address: None,
            profile_image: None,
        };
        assert!(dto.validate().is_ok());
    }
}
