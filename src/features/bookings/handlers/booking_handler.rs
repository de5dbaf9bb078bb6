use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::{RequireCaterer, RequireCustomer};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::bookings::dtos::{
    AddItemDto, BookingDetailDto, BookingResponseDto, CreateBookingDto, ListBookingsQuery,
    UpdateStatusDto,
};
use crate::features::bookings::services::BookingService;
use crate::shared::types::ApiResponse;

/// Create a pending booking
#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = CreateBookingDto,
    responses(
        (status = 200, description = "Booking created", body = ApiResponse<BookingResponseDto>),
        (status = 400, description = "Validation error (past date, guest bounds)"),
        (status = 403, description = "Customer role required"),
        (status = 404, description = "Caterer not found")
    ),
    security(("bearer_auth" = [])),
    tag = "bookings"
)]
pub async fn create_booking(
    State(service): State<Arc<BookingService>>,
    RequireCustomer(user): RequireCustomer,
    AppJson(dto): AppJson<CreateBookingDto>,
) -> Result<Json<ApiResponse<BookingResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let booking = service.create(user.id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(booking),
        Some("Booking created successfully".to_string()),
        None,
    )))
}

/// List own bookings (customer)
#[utoipa::path(
    get,
    path = "/api/bookings",
    params(ListBookingsQuery),
    responses(
        (status = 200, description = "List of own bookings", body = ApiResponse<Vec<BookingResponseDto>>),
        (status = 403, description = "Customer role required")
    ),
    security(("bearer_auth" = [])),
    tag = "bookings"
)]
pub async fn list_bookings(
    State(service): State<Arc<BookingService>>,
    RequireCustomer(user): RequireCustomer,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<ApiResponse<Vec<BookingResponseDto>>>> {
    let bookings = service.list_for_customer(user.id, &query).await?;
    Ok(Json(ApiResponse::success(Some(bookings), None, None)))
}

/// List bookings placed with the calling caterer
#[utoipa::path(
    get,
    path = "/api/bookings/caterer",
    params(ListBookingsQuery),
    responses(
        (status = 200, description = "Bookings for own profile", body = ApiResponse<Vec<BookingResponseDto>>),
        (status = 403, description = "Caterer role required"),
        (status = 404, description = "Caterer profile not found")
    ),
    security(("bearer_auth" = [])),
    tag = "bookings"
)]
pub async fn list_caterer_bookings(
    State(service): State<Arc<BookingService>>,
    RequireCaterer(user): RequireCaterer,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<ApiResponse<Vec<BookingResponseDto>>>> {
    let bookings = service.list_for_caterer(user.id, &query).await?;
    Ok(Json(ApiResponse::success(Some(bookings), None, None)))
}

/// Booking detail with line items
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    params(("id" = Uuid, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking detail", body = ApiResponse<BookingDetailDto>),
        (status = 403, description = "Not a party to this booking"),
        (status = 404, description = "Booking not found")
    ),
    security(("bearer_auth" = [])),
    tag = "bookings"
)]
pub async fn get_booking(
    State(service): State<Arc<BookingService>>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingDetailDto>>> {
    let detail = service.get_detail(&user, id).await?;
    Ok(Json(ApiResponse::success(Some(detail), None, None)))
}

/// Add a line item to a pending booking
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/items",
    params(("id" = Uuid, Path, description = "Booking id")),
    request_body = AddItemDto,
    responses(
        (status = 200, description = "Item added", body = ApiResponse<BookingDetailDto>),
        (status = 400, description = "Item unavailable or from another caterer"),
        (status = 403, description = "Not the booking's customer"),
        (status = 404, description = "Booking or menu item not found"),
        (status = 409, description = "Booking is no longer pending")
    ),
    security(("bearer_auth" = [])),
    tag = "bookings"
)]
pub async fn add_booking_item(
    State(service): State<Arc<BookingService>>,
    RequireCustomer(user): RequireCustomer,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<AddItemDto>,
) -> Result<Json<ApiResponse<BookingDetailDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let detail = service.add_item(user.id, id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(detail),
        Some("Item added to booking".to_string()),
        None,
    )))
}

/// Remove a line item from a pending booking
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}/items/{item_id}",
    params(
        ("id" = Uuid, Path, description = "Booking id"),
        ("item_id" = Uuid, Path, description = "Booking item id")
    ),
    responses(
        (status = 200, description = "Item removed", body = ApiResponse<BookingDetailDto>),
        (status = 403, description = "Not the booking's customer"),
        (status = 404, description = "Booking or item not found"),
        (status = 409, description = "Booking is no longer pending")
    ),
    security(("bearer_auth" = [])),
    tag = "bookings"
)]
pub async fn remove_booking_item(
    State(service): State<Arc<BookingService>>,
    RequireCustomer(user): RequireCustomer,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<BookingDetailDto>>> {
    let detail = service.remove_item(user.id, id, item_id).await?;
    Ok(Json(ApiResponse::success(
        Some(detail),
        Some("Item removed from booking".to_string()),
        None,
    )))
}

/// Confirm a pending booking (price-lock)
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/confirm",
    params(("id" = Uuid, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking confirmed", body = ApiResponse<BookingResponseDto>),
        (status = 403, description = "Not the booking's customer"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "No items, or booking no longer pending")
    ),
    security(("bearer_auth" = [])),
    tag = "bookings"
)]
pub async fn confirm_booking(
    State(service): State<Arc<BookingService>>,
    RequireCustomer(user): RequireCustomer,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponseDto>>> {
    let booking = service.confirm(user.id, id).await?;
    Ok(Json(ApiResponse::success(
        Some(booking),
        Some("Booking confirmed successfully".to_string()),
        None,
    )))
}

/// Cancel a pending booking
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/cancel",
    params(("id" = Uuid, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking cancelled", body = ApiResponse<BookingResponseDto>),
        (status = 403, description = "Not the booking's customer"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Booking is no longer pending")
    ),
    security(("bearer_auth" = [])),
    tag = "bookings"
)]
pub async fn cancel_booking(
    State(service): State<Arc<BookingService>>,
    RequireCustomer(user): RequireCustomer,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponseDto>>> {
    let booking = service.cancel(user.id, id).await?;
    Ok(Json(ApiResponse::success(
        Some(booking),
        Some("Booking cancelled".to_string()),
        None,
    )))
}

/// Advance the booking lifecycle (caterer)
#[utoipa::path(
    put,
    path = "/api/bookings/{id}/status",
    params(("id" = Uuid, Path, description = "Booking id")),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<BookingResponseDto>),
        (status = 403, description = "Not the booking's caterer"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Illegal lifecycle transition")
    ),
    security(("bearer_auth" = [])),
    tag = "bookings"
)]
pub async fn update_booking_status(
    State(service): State<Arc<BookingService>>,
    RequireCaterer(user): RequireCaterer,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateStatusDto>,
) -> Result<Json<ApiResponse<BookingResponseDto>>> {
    let booking = service.update_status(user.id, id, dto.status).await?;
    Ok(Json(ApiResponse::success(
        Some(booking),
        Some("Booking status updated".to_string()),
        None,
    )))
}
