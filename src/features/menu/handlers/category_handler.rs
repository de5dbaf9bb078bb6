use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireCaterer;
use crate::features::menu::dtos::{CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto};
use crate::features::menu::services::CategoryService;
use crate::shared::types::ApiResponse;

/// List all menu categories (active and inactive)
#[utoipa::path(
    get,
    path = "/api/menu/categories",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
        (status = 403, description = "Caterer role required")
    ),
    security(("bearer_auth" = [])),
    tag = "menu"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
    RequireCaterer(_user): RequireCaterer,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.list().await?;
    Ok(Json(ApiResponse::success(Some(categories), None, None)))
}

/// Create a menu category
#[utoipa::path(
    post,
    path = "/api/menu/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 200, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error (duplicate name)"),
        (status = 403, description = "Caterer role required")
    ),
    security(("bearer_auth" = [])),
    tag = "menu"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    RequireCaterer(_user): RequireCaterer,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.create(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(category),
        Some("Category added successfully".to_string()),
        None,
    )))
}

/// Update a menu category (including the is_active soft-disable flag)
#[utoipa::path(
    put,
    path = "/api/menu/categories/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    security(("bearer_auth" = [])),
    tag = "menu"
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    RequireCaterer(_user): RequireCaterer,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCategoryDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(category),
        Some("Category updated successfully".to_string()),
        None,
    )))
}

/// Delete a menu category; referencing items are detached, not deleted
#[utoipa::path(
    delete,
    path = "/api/menu/categories/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Category not found")
    ),
    security(("bearer_auth" = [])),
    tag = "menu"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    RequireCaterer(_user): RequireCaterer,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Category deleted successfully".to_string()),
        None,
    )))
}
