use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::users::models::UserRole;

/// JWT claims carried by locally issued access tokens
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and validates HS256 access tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: chrono::Duration,
}

impl TokenService {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl: chrono::Duration::from_std(config.token_ttl)
                .unwrap_or_else(|_| chrono::Duration::hours(24)),
        }
    }

    /// Issue a token for the given user
    pub fn issue(&self, user: &AuthenticatedUser) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: (now + self.token_ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to issue token: {}", e)))
    }

    /// Validate a bearer token and recover the caller identity
    pub fn validate(&self, token: &str) -> Result<AuthenticatedUser> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        Ok(AuthenticatedUser {
            id: data.claims.sub,
            username: data.claims.username,
            role: data.claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn token_service() -> TokenService {
        TokenService::new(AuthConfig {
            jwt_secret: "0123456789abcdef0123456789abcdef".to_string(),
            token_ttl: Duration::from_secs(3600),
        })
    }

    #[test]
    fn test_issue_and_validate_round_trip() {
        let service = token_service();
        let user = AuthenticatedUser {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            role: UserRole::Caterer,
        };

        let token = service.issue(&user).unwrap();
        let decoded = service.validate(&token).unwrap();

        assert_eq!(decoded.id, user.id);
        assert_eq!(decoded.username, "alice");
        assert_eq!(decoded.role, UserRole::Caterer);
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let service = token_service();
        assert!(service.validate("not.a.token").is_err());
    }

    #[test]
    fn test_validate_rejects_wrong_secret() {
        let service = token_service();
        let other = TokenService::new(AuthConfig {
            jwt_secret: "ffffffffffffffffffffffffffffffff".to_string(),
            token_ttl: Duration::from_secs(3600),
        });

        let user = AuthenticatedUser {
            id: Uuid::new_v4(),
            username: "bob".to_string(),
            role: UserRole::Customer,
        };
        let token = other.issue(&user).unwrap();
        assert!(service.validate(&token).is_err());
    }
}
