use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// User role enum matching database enum.
///
/// A closed set checked exhaustively at every authorization point; the
/// role is fixed at registration and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Caterer,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Customer => write!(f, "customer"),
            UserRole::Caterer => write!(f, "caterer"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

impl UserRole {
    /// Post-login landing target resolved by role
    pub fn redirect_target(&self) -> &'static str {
        match self {
            UserRole::Caterer => "/dashboard/caterer",
            UserRole::Admin => "/dashboard/admin",
            UserRole::Customer => "/",
        }
    }
}

/// Database model for user
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub profile_image: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_target_by_role() {
        assert_eq!(UserRole::Caterer.redirect_target(), "/dashboard/caterer");
        assert_eq!(UserRole::Admin.redirect_target(), "/dashboard/admin");
        assert_eq!(UserRole::Customer.redirect_target(), "/");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(UserRole::Customer.to_string(), "customer");
        assert_eq!(UserRole::Caterer.to_string(), "caterer");
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }
}
