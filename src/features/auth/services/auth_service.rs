use std::sync::Arc;

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{AuthResponseDto, LoginDto, RegisterDto};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::services::TokenService;
use crate::features::caterers::models::default_company_name;
use crate::features::users::models::{User, UserRole};
use crate::shared::validation::USERNAME_REGEX;

/// Service for registration and login
pub struct AuthService {
    pool: PgPool,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(pool: PgPool, tokens: Arc<TokenService>) -> Self {
        Self { pool, tokens }
    }

    /// Register a new account with the chosen role.
    ///
    /// A caterer registration provisions the caterer profile in the same
    /// transaction, named after the username.
    pub async fn register(&self, dto: RegisterDto) -> Result<AuthResponseDto> {
        if !USERNAME_REGEX.is_match(&dto.username) {
            return Err(AppError::Validation(
                "Username may only contain letters, digits and underscores".to_string(),
            ));
        }

        let username_taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)",
        )
        .bind(&dto.username)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if username_taken {
            return Err(AppError::Validation("Username already exists".to_string()));
        }

        let email_taken =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(&dto.email)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)?;

        if email_taken {
            return Err(AppError::Validation("Email already exists".to_string()));
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(dto.password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?
            .to_string();

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash, role, phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, email, password_hash, role, phone, address,
                      profile_image, is_active, created_at, updated_at
            "#,
        )
        .bind(&dto.username)
        .bind(&dto.email)
        .bind(&password_hash)
        .bind(dto.role)
        .bind(&dto.phone)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create user: {:?}", e);
            AppError::Database(e)
        })?;

        if user.role == UserRole::Caterer {
            sqlx::query("INSERT INTO caterer_profiles (user_id, company_name) VALUES ($1, $2)")
                .bind(user.id)
                .bind(default_company_name(&user.username))
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to create caterer profile: {:?}", e);
                    AppError::Database(e)
                })?;
        }

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            "User registered: id={}, username={}, role={}",
            user.id,
            user.username,
            user.role
        );

        self.auth_response(user)
    }

    /// Verify credentials and issue a token
    pub async fn login(&self, dto: LoginDto) -> Result<AuthResponseDto> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, role, phone, address,
                   profile_image, is_active, created_at, updated_at
            FROM users
            WHERE username = $1 AND is_active = TRUE
            "#,
        )
        .bind(&dto.username)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

        let parsed = PasswordHash::new(&user.password_hash)
            .map_err(|e| AppError::Internal(format!("Corrupt password hash: {}", e)))?;

        Argon2::default()
            .verify_password(dto.password.as_bytes(), &parsed)
            .map_err(|_| AppError::Unauthorized("Invalid username or password".to_string()))?;

        tracing::info!("User logged in: id={}, username={}", user.id, user.username);

        self.auth_response(user)
    }

    fn auth_response(&self, user: User) -> Result<AuthResponseDto> {
        let authenticated = AuthenticatedUser {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
        };
        let token = self.tokens.issue(&authenticated)?;
        let redirect = user.role.redirect_target().to_string();

        Ok(AuthResponseDto {
            token,
            user: user.into(),
            redirect,
        })
    }
}
