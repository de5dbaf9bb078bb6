use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::bookings::handlers::booking_handler;
use crate::features::bookings::services::BookingService;

/// Create routes for the booking feature (all require authentication)
pub fn routes(service: Arc<BookingService>) -> Router {
    Router::new()
        .route(
            "/api/bookings",
            get(booking_handler::list_bookings).post(booking_handler::create_booking),
        )
        .route(
            "/api/bookings/caterer",
            get(booking_handler::list_caterer_bookings),
        )
        .route("/api/bookings/{id}", get(booking_handler::get_booking))
        .route(
            "/api/bookings/{id}/items",
            post(booking_handler::add_booking_item),
        )
        .route(
            "/api/bookings/{id}/items/{item_id}",
            delete(booking_handler::remove_booking_item),
        )
        .route(
            "/api/bookings/{id}/confirm",
            post(booking_handler::confirm_booking),
        )
        .route(
            "/api/bookings/{id}/cancel",
            post(booking_handler::cancel_booking),
        )
        .route(
            "/api/bookings/{id}/status",
            put(booking_handler::update_booking_status),
        )
        .with_state(service)
}
