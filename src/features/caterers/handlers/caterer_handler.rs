use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::{RequireAdmin, RequireCaterer};
use crate::features::caterers::dtos::{
    CatererDetailDto, CatererResponseDto, ListCaterersQuery, UpdateCatererProfileDto,
    VerifyCatererDto,
};
use crate::features::caterers::services::CatererService;
use crate::shared::types::ApiResponse;

/// Public caterer directory
#[utoipa::path(
    get,
    path = "/api/caterers",
    params(ListCaterersQuery),
    responses(
        (status = 200, description = "List of caterers", body = ApiResponse<Vec<CatererResponseDto>>)
    ),
    tag = "caterers"
)]
pub async fn list_caterers(
    State(service): State<Arc<CatererService>>,
    Query(query): Query<ListCaterersQuery>,
) -> Result<Json<ApiResponse<Vec<CatererResponseDto>>>> {
    let caterers = service.list(&query).await?;
    Ok(Json(ApiResponse::success(Some(caterers), None, None)))
}

/// Public caterer detail with menu and rating
#[utoipa::path(
    get,
    path = "/api/caterers/{id}",
    params(("id" = Uuid, Path, description = "Caterer profile id")),
    responses(
        (status = 200, description = "Caterer detail", body = ApiResponse<CatererDetailDto>),
        (status = 404, description = "Caterer not found")
    ),
    tag = "caterers"
)]
pub async fn get_caterer(
    State(service): State<Arc<CatererService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CatererDetailDto>>> {
    let detail = service.get_detail(id).await?;
    Ok(Json(ApiResponse::success(Some(detail), None, None)))
}

/// Own caterer profile
#[utoipa::path(
    get,
    path = "/api/caterers/me",
    responses(
        (status = 200, description = "Own caterer profile", body = ApiResponse<CatererResponseDto>),
        (status = 403, description = "Caterer role required")
    ),
    security(("bearer_auth" = [])),
    tag = "caterers"
)]
pub async fn get_own_profile(
    State(service): State<Arc<CatererService>>,
    RequireCaterer(user): RequireCaterer,
) -> Result<Json<ApiResponse<CatererResponseDto>>> {
    let profile = service.get_own(user.id).await?;
    Ok(Json(ApiResponse::success(Some(profile), None, None)))
}

/// Update own caterer profile
#[utoipa::path(
    put,
    path = "/api/caterers/me",
    request_body = UpdateCatererProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<CatererResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Caterer role required")
    ),
    security(("bearer_auth" = [])),
    tag = "caterers"
)]
pub async fn update_own_profile(
    State(service): State<Arc<CatererService>>,
    RequireCaterer(user): RequireCaterer,
    AppJson(dto): AppJson<UpdateCatererProfileDto>,
) -> Result<Json<ApiResponse<CatererResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let profile = service.update_own(user.id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(profile),
        Some("Caterer profile updated successfully".to_string()),
        None,
    )))
}

/// Toggle caterer verification (admin)
#[utoipa::path(
    put,
    path = "/api/caterers/{id}/verify",
    params(("id" = Uuid, Path, description = "Caterer profile id")),
    request_body = VerifyCatererDto,
    responses(
        (status = 200, description = "Verification updated", body = ApiResponse<CatererResponseDto>),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Caterer not found")
    ),
    security(("bearer_auth" = [])),
    tag = "caterers"
)]
pub async fn verify_caterer(
    State(service): State<Arc<CatererService>>,
    RequireAdmin(_user): RequireAdmin,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<VerifyCatererDto>,
) -> Result<Json<ApiResponse<CatererResponseDto>>> {
    let profile = service.set_verified(id, dto.is_verified).await?;
    Ok(Json(ApiResponse::success(
        Some(profile),
        Some("Caterer verification updated".to_string()),
        None,
    )))
}
