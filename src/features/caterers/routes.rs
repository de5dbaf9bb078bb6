use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::caterers::handlers::caterer_handler;
use crate::features::caterers::services::CatererService;

/// Routes requiring authentication (own profile, admin verification)
pub fn routes(service: Arc<CatererService>) -> Router {
    Router::new()
        .route(
            "/api/caterers/me",
            get(caterer_handler::get_own_profile).put(caterer_handler::update_own_profile),
        )
        .route(
            "/api/caterers/{id}/verify",
            put(caterer_handler::verify_caterer),
        )
        .with_state(service)
}

/// Public routes (directory and detail)
pub fn public_routes(service: Arc<CatererService>) -> Router {
    Router::new()
        .route("/api/caterers", get(caterer_handler::list_caterers))
        .route("/api/caterers/{id}", get(caterer_handler::get_caterer))
        .with_state(service)
}
