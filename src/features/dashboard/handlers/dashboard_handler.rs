use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::auth::guards::{RequireAdmin, RequireCaterer};
use crate::features::dashboard::dtos::{AdminDashboardDto, CatererDashboardDto, HomeDashboardDto};
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ApiResponse;

/// Public home summary
#[utoipa::path(
    get,
    path = "/api/dashboard/home",
    responses(
        (status = 200, description = "Home summary", body = ApiResponse<HomeDashboardDto>)
    ),
    tag = "dashboard"
)]
pub async fn home_dashboard(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<HomeDashboardDto>>> {
    let dashboard = service.home().await?;
    Ok(Json(ApiResponse::success(Some(dashboard), None, None)))
}

/// Caterer dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard/caterer",
    responses(
        (status = 200, description = "Caterer dashboard", body = ApiResponse<CatererDashboardDto>),
        (status = 403, description = "Caterer role required"),
        (status = 404, description = "Caterer profile not found")
    ),
    security(("bearer_auth" = [])),
    tag = "dashboard"
)]
pub async fn caterer_dashboard(
    State(service): State<Arc<DashboardService>>,
    RequireCaterer(user): RequireCaterer,
) -> Result<Json<ApiResponse<CatererDashboardDto>>> {
    let dashboard = service.caterer(user.id).await?;
    Ok(Json(ApiResponse::success(Some(dashboard), None, None)))
}

/// Admin dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard/admin",
    responses(
        (status = 200, description = "Admin dashboard", body = ApiResponse<AdminDashboardDto>),
        (status = 403, description = "Admin role required")
    ),
    security(("bearer_auth" = [])),
    tag = "dashboard"
)]
pub async fn admin_dashboard(
    State(service): State<Arc<DashboardService>>,
    RequireAdmin(_user): RequireAdmin,
) -> Result<Json<ApiResponse<AdminDashboardDto>>> {
    let dashboard = service.admin().await?;
    Ok(Json(ApiResponse::success(Some(dashboard), None, None)))
}
