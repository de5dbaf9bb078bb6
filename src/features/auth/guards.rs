//! Role-based authorization guards.
//!
//! Each guard extracts the authenticated user from request extensions and
//! verifies the role. Roles here are flat, not hierarchical: a caterer is
//! not a customer and vice versa.

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

fn authenticated(parts: &Parts) -> Result<AuthenticatedUser, AppError> {
    parts
        .extensions
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))
}

/// Guard for customer-only operations (booking mutations, reviews).
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireCustomer(user): RequireCustomer) { ... }
/// ```
pub struct RequireCustomer(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireCustomer
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticated(parts)?;

        if !user.is_customer() {
            return Err(AppError::Forbidden(
                "Only customers can perform this action".to_string(),
            ));
        }

        Ok(RequireCustomer(user))
    }
}

/// Guard for caterer-only operations (menu management, booking status).
pub struct RequireCaterer(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireCaterer
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticated(parts)?;

        if !user.is_caterer() {
            return Err(AppError::Forbidden(
                "Only caterers can perform this action".to_string(),
            ));
        }

        Ok(RequireCaterer(user))
    }
}

/// Guard for admin-only operations (verification, admin dashboard).
pub struct RequireAdmin(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticated(parts)?;

        if !user.is_admin() {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }

        Ok(RequireAdmin(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::models::UserRole;
    use crate::shared::test_helpers::{create_test_user, with_auth};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn guarded_router() -> Router {
        async fn customer_only(RequireCustomer(_user): RequireCustomer) {}
        async fn caterer_only(RequireCaterer(_user): RequireCaterer) {}
        async fn admin_only(RequireAdmin(_user): RequireAdmin) {}

        Router::new()
            .route("/customer", get(customer_only))
            .route("/caterer", get(caterer_only))
            .route("/admin", get(admin_only))
    }

    async fn status_for(router: Router, path: &str) -> StatusCode {
        let response = router
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn test_guards_pass_matching_role() {
        for (role, path) in [
            (UserRole::Customer, "/customer"),
            (UserRole::Caterer, "/caterer"),
            (UserRole::Admin, "/admin"),
        ] {
            let router = with_auth(guarded_router(), create_test_user(role));
            assert_eq!(status_for(router, path).await, StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_guards_reject_other_roles() {
        let router = with_auth(guarded_router(), create_test_user(UserRole::Customer));
        assert_eq!(
            status_for(router.clone(), "/caterer").await,
            StatusCode::FORBIDDEN
        );
        assert_eq!(status_for(router, "/admin").await, StatusCode::FORBIDDEN);

        // Roles are flat: a caterer is not a customer
        let router = with_auth(guarded_router(), create_test_user(UserRole::Caterer));
        assert_eq!(
            status_for(router, "/customer").await,
            StatusCode::FORBIDDEN
        );
    }

    #[tokio::test]
    async fn test_guards_require_authentication() {
        assert_eq!(
            status_for(guarded_router(), "/customer").await,
            StatusCode::UNAUTHORIZED
        );
    }
}
