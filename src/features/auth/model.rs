use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::users::models::UserRole;

/// The authenticated caller, injected into request extensions by the
/// bearer middleware. Carries the closed role variant so authorization
/// checks match exhaustively instead of comparing strings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn is_customer(&self) -> bool {
        matches!(self.role, UserRole::Customer)
    }

    pub fn is_caterer(&self) -> bool {
        matches!(self.role, UserRole::Caterer)
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }
}
