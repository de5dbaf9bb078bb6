use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::dashboard::handlers::dashboard_handler;
use crate::features::dashboard::services::DashboardService;

/// Routes requiring authentication (role-gated dashboards)
pub fn routes(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route(
            "/api/dashboard/caterer",
            get(dashboard_handler::caterer_dashboard),
        )
        .route(
            "/api/dashboard/admin",
            get(dashboard_handler::admin_dashboard),
        )
        .with_state(service)
}

/// Public routes (home summary)
pub fn public_routes(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/dashboard/home", get(dashboard_handler::home_dashboard))
        .with_state(service)
}
