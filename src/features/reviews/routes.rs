use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::reviews::handlers::review_handler;
use crate::features::reviews::services::ReviewService;

/// Routes requiring authentication (review submission)
pub fn routes(service: Arc<ReviewService>) -> Router {
    Router::new()
        .route(
            "/api/bookings/{id}/reviews",
            post(review_handler::create_review),
        )
        .with_state(service)
}

/// Public routes (review listing)
pub fn public_routes(service: Arc<ReviewService>) -> Router {
    Router::new()
        .route(
            "/api/caterers/{id}/reviews",
            get(review_handler::list_caterer_reviews),
        )
        .with_state(service)
}
