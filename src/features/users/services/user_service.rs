use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::{UpdateProfileDto, UserProfileDto};
use crate::features::users::models::User;

/// Service for user profile operations
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a user's own profile
    pub async fn get_profile(&self, user_id: Uuid) -> Result<UserProfileDto> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, role, phone, address,
                   profile_image, is_active, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get user profile: {:?}", e);
            AppError::Database(e)
        })?;

        user.map(|u| u.into())
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Update own profile fields. The role is never part of this update;
    /// no role-change operation exists after registration.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        dto: UpdateProfileDto,
    ) -> Result<UserProfileDto> {
        if let Some(ref email) = dto.email {
            let taken = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 AND id <> $2)",
            )
            .bind(email)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

            if taken {
                return Err(AppError::Validation("Email already exists".to_string()));
            }
        }

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                email = COALESCE($2, email),
                phone = COALESCE($3, phone),
                address = COALESCE($4, address),
                profile_image = COALESCE($5, profile_image),
                updated_at = now()
            WHERE id = $1
            RETURNING id, username, email, password_hash, role, phone, address,
                      profile_image, is_active, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(dto.email)
        .bind(dto.phone)
        .bind(dto.address)
        .bind(dto.profile_image)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update user profile: {:?}", e);
            AppError::Database(e)
        })?;

        user.map(|u| u.into())
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
