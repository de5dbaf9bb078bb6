use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::auth::handlers::auth_handler;
use crate::features::auth::services::AuthService;

/// Public routes for the auth feature (no authentication required)
pub fn public_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/auth/register", post(auth_handler::register))
        .route("/api/auth/login", post(auth_handler::login))
        .with_state(service)
}
