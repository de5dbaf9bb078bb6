use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireCaterer;
use crate::features::menu::dtos::{
    CreateMenuItemDto, ListMenuItemsQuery, MenuItemResponseDto, UpdateMenuItemDto,
};
use crate::features::menu::services::MenuItemService;
use crate::shared::types::ApiResponse;

/// List own menu items, newest first
#[utoipa::path(
    get,
    path = "/api/menu/items",
    params(ListMenuItemsQuery),
    responses(
        (status = 200, description = "List of own menu items", body = ApiResponse<Vec<MenuItemResponseDto>>),
        (status = 403, description = "Caterer role required")
    ),
    security(("bearer_auth" = [])),
    tag = "menu"
)]
pub async fn list_menu_items(
    State(service): State<Arc<MenuItemService>>,
    RequireCaterer(user): RequireCaterer,
    Query(query): Query<ListMenuItemsQuery>,
) -> Result<Json<ApiResponse<Vec<MenuItemResponseDto>>>> {
    let items = service.list_own(user.id, &query).await?;
    Ok(Json(ApiResponse::success(Some(items), None, None)))
}

/// Create a menu item
#[utoipa::path(
    post,
    path = "/api/menu/items",
    request_body = CreateMenuItemDto,
    responses(
        (status = 200, description = "Menu item created", body = ApiResponse<MenuItemResponseDto>),
        (status = 400, description = "Validation error (negative price, inactive category)"),
        (status = 403, description = "Caterer role required")
    ),
    security(("bearer_auth" = [])),
    tag = "menu"
)]
pub async fn create_menu_item(
    State(service): State<Arc<MenuItemService>>,
    RequireCaterer(user): RequireCaterer,
    AppJson(dto): AppJson<CreateMenuItemDto>,
) -> Result<Json<ApiResponse<MenuItemResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let item = service.create(user.id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(item),
        Some("Menu item added successfully".to_string()),
        None,
    )))
}

/// Update an own menu item
#[utoipa::path(
    put,
    path = "/api/menu/items/{id}",
    params(("id" = Uuid, Path, description = "Menu item id")),
    request_body = UpdateMenuItemDto,
    responses(
        (status = 200, description = "Menu item updated", body = ApiResponse<MenuItemResponseDto>),
        (status = 403, description = "Not the owning caterer"),
        (status = 404, description = "Menu item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "menu"
)]
pub async fn update_menu_item(
    State(service): State<Arc<MenuItemService>>,
    RequireCaterer(user): RequireCaterer,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateMenuItemDto>,
) -> Result<Json<ApiResponse<MenuItemResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let item = service.update(user.id, id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(item),
        Some("Menu item updated successfully".to_string()),
        None,
    )))
}

/// Delete an own menu item
#[utoipa::path(
    delete,
    path = "/api/menu/items/{id}",
    params(("id" = Uuid, Path, description = "Menu item id")),
    responses(
        (status = 200, description = "Menu item deleted"),
        (status = 403, description = "Not the owning caterer"),
        (status = 404, description = "Menu item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "menu"
)]
pub async fn delete_menu_item(
    State(service): State<Arc<MenuItemService>>,
    RequireCaterer(user): RequireCaterer,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(user.id, id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Menu item deleted successfully".to_string()),
        None,
    )))
}
