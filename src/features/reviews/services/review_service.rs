use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::bookings::models::Booking;
use crate::features::reviews::dtos::{CreateReviewDto, ReviewResponseDto};
use crate::features::reviews::models::{
    check_review_allowed, mean_rating, ReviewRejection, ReviewWithCustomer,
};
use crate::shared::types::PaginationQuery;

/// Service for review operations
pub struct ReviewService {
    pool: PgPool,
}

impl ReviewService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Submit the one allowed review for a completed booking.
    ///
    /// The insert and the caterer rating recomputation share a
    /// transaction; the booking row is locked so a concurrent double
    /// submit serializes and the second one hits the uniqueness check.
    pub async fn submit(
        &self,
        customer_id: Uuid,
        booking_id: Uuid,
        dto: CreateReviewDto,
    ) -> Result<ReviewResponseDto> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, customer_id, caterer_id, event_name, event_date, event_time,
                   location, number_of_guests, special_requests, status, total_amount,
                   created_at, updated_at
            FROM bookings
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(booking_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Booking '{}' not found", booking_id)))?;

        let already_reviewed = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM reviews WHERE booking_id = $1)",
        )
        .bind(booking_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        check_review_allowed(booking.customer_id, customer_id, booking.status, already_reviewed)
            .map_err(|rejection| match rejection {
                ReviewRejection::NotBookingOwner => AppError::Forbidden(
                    "You can only review your own bookings".to_string(),
                ),
                ReviewRejection::BookingNotCompleted(_) => AppError::Conflict(
                    "You can only review completed bookings".to_string(),
                ),
                ReviewRejection::AlreadyReviewed => AppError::Conflict(
                    "You have already reviewed this booking".to_string(),
                ),
            })?;

        let review_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO reviews (booking_id, customer_id, caterer_id, rating, comment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(booking_id)
        .bind(customer_id)
        .bind(booking.caterer_id)
        .bind(dto.rating)
        .bind(&dto.comment)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create review: {:?}", e);
            AppError::Database(e)
        })?;

        // Mean over all of the caterer's reviews, including the one
        // just inserted
        let ratings =
            sqlx::query_scalar::<_, i32>("SELECT rating FROM reviews WHERE caterer_id = $1")
                .bind(booking.caterer_id)
                .fetch_all(&mut *tx)
                .await
                .map_err(AppError::Database)?;

        let rating = mean_rating(&ratings).unwrap_or_default();

        sqlx::query("UPDATE caterer_profiles SET rating = $2 WHERE id = $1")
            .bind(booking.caterer_id)
            .bind(rating)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to recompute caterer rating: {:?}", e);
                AppError::Database(e)
            })?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            "Review created: id={}, booking={}, rating={}",
            review_id,
            booking_id,
            dto.rating
        );

        self.get_by_id(review_id).await
    }

    /// List a caterer's reviews, newest first.
    /// Returns (reviews, total_count).
    pub async fn list_for_caterer(
        &self,
        caterer_id: Uuid,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<ReviewResponseDto>, i64)> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM reviews WHERE caterer_id = $1",
        )
        .bind(caterer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let reviews = sqlx::query_as::<_, ReviewWithCustomer>(
            r#"
            SELECT r.id, r.booking_id, u.username AS customer_username,
                   r.rating, r.comment, r.created_at
            FROM reviews r
            JOIN users u ON u.id = r.customer_id
            WHERE r.caterer_id = $1
            ORDER BY r.created_at DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(caterer_id)
        .bind(pagination.offset())
        .bind(pagination.limit())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list reviews: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((reviews.into_iter().map(|r| r.into()).collect(), total))
    }

    /// The most recent reviews shown on the public caterer detail view
    pub async fn recent_for_caterer(
        &self,
        caterer_id: Uuid,
        limit: i64,
    ) -> Result<Vec<ReviewResponseDto>> {
        let reviews = sqlx::query_as::<_, ReviewWithCustomer>(
            r#"
            SELECT r.id, r.booking_id, u.username AS customer_username,
                   r.rating, r.comment, r.created_at
            FROM reviews r
            JOIN users u ON u.id = r.customer_id
            WHERE r.caterer_id = $1
            ORDER BY r.created_at DESC
            LIMIT $2
            "#,
        )
        .bind(caterer_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(reviews.into_iter().map(|r| r.into()).collect())
    }

    async fn get_by_id(&self, review_id: Uuid) -> Result<ReviewResponseDto> {
        let review = sqlx::query_as::<_, ReviewWithCustomer>(
            r#"
            SELECT r.id, r.booking_id, u.username AS customer_username,
                   r.rating, r.comment, r.created_at
            FROM reviews r
            JOIN users u ON u.id = r.customer_id
            WHERE r.id = $1
            "#,
        )
        .bind(review_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        review
            .map(|r| r.into())
            .ok_or_else(|| AppError::NotFound(format!("Review '{}' not found", review_id)))
    }
}
