use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireCustomer;
use crate::features::reviews::dtos::{CreateReviewDto, ReviewResponseDto};
use crate::features::reviews::services::ReviewService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Submit a review for a completed booking
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/reviews",
    params(("id" = Uuid, Path, description = "Booking id")),
    request_body = CreateReviewDto,
    responses(
        (status = 200, description = "Review created", body = ApiResponse<ReviewResponseDto>),
        (status = 403, description = "Not the booking's customer"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Booking not completed or already reviewed")
    ),
    security(("bearer_auth" = [])),
    tag = "reviews"
)]
pub async fn create_review(
    State(service): State<Arc<ReviewService>>,
    RequireCustomer(user): RequireCustomer,
    Path(booking_id): Path<Uuid>,
    AppJson(dto): AppJson<CreateReviewDto>,
) -> Result<Json<ApiResponse<ReviewResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let review = service.submit(user.id, booking_id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(review),
        Some("Review submitted successfully".to_string()),
        None,
    )))
}

/// List a caterer's reviews, newest first (public)
#[utoipa::path(
    get,
    path = "/api/caterers/{id}/reviews",
    params(
        ("id" = Uuid, Path, description = "Caterer profile id"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "Paginated reviews", body = ApiResponse<Vec<ReviewResponseDto>>)
    ),
    tag = "reviews"
)]
pub async fn list_caterer_reviews(
    State(service): State<Arc<ReviewService>>,
    Path(caterer_id): Path<Uuid>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ReviewResponseDto>>>> {
    let (reviews, total) = service.list_for_caterer(caterer_id, &pagination).await?;
    Ok(Json(ApiResponse::success(
        Some(reviews),
        None,
        Some(Meta { total }),
    )))
}
