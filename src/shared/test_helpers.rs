#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;
#[cfg(test)]
use crate::features::users::models::UserRole;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};
#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
pub fn create_test_user(role: UserRole) -> AuthenticatedUser {
    AuthenticatedUser {
        id: Uuid::new_v4(),
        username: format!("test_{}", role),
        role,
    }
}

#[cfg(test)]
async fn inject_user_middleware(
    user: AuthenticatedUser,
    mut request: Request,
    next: Next,
) -> Response {
    request.extensions_mut().insert(user);
    next.run(request).await
}

/// Wrap a router so every request carries the given authenticated user,
/// bypassing the bearer-token middleware in tests.
#[cfg(test)]
pub fn with_auth(router: Router, user: AuthenticatedUser) -> Router {
    router.layer(axum::middleware::from_fn(move |request, next| {
        let user = user.clone();
        inject_user_middleware(user, request, next)
    }))
}
