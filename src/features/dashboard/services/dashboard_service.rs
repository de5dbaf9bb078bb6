use std::sync::Arc;

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::bookings::models::Booking;
use crate::features::caterers::models::CatererProfile;
use crate::features::dashboard::dtos::{
    AdminDashboardDto, BookingStatusCountsDto, CatererDashboardDto, HomeDashboardDto,
};
use crate::features::menu::services::CategoryService;
use crate::shared::constants::{FEATURED_CATERER_LIMIT, RECENT_BOOKING_LIMIT};

/// Service for the aggregate dashboard views. Everything is computed
/// per request from the live tables.
pub struct DashboardService {
    pool: PgPool,
    categories: Arc<CategoryService>,
}

impl DashboardService {
    pub fn new(pool: PgPool, categories: Arc<CategoryService>) -> Self {
        Self { pool, categories }
    }

    /// Public home summary
    pub async fn home(&self) -> Result<HomeDashboardDto> {
        let featured = sqlx::query_as::<_, CatererProfile>(
            r#"
            SELECT cp.id, cp.user_id, cp.company_name, cp.description,
                   cp.license_number, cp.service_area, cp.is_verified,
                   cp.rating, cp.total_bookings
            FROM caterer_profiles cp
            JOIN users u ON u.id = cp.user_id
            WHERE cp.is_verified = TRUE AND u.is_active = TRUE
            ORDER BY cp.total_bookings DESC, cp.rating DESC
            LIMIT $1
            "#,
        )
        .bind(FEATURED_CATERER_LIMIT)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let categories = self.categories.list_active().await?;

        let total_caterers =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM caterer_profiles")
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)?;

        let total_bookings = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookings")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(HomeDashboardDto {
            featured_caterers: featured.into_iter().map(|c| c.into()).collect(),
            categories,
            total_caterers,
            total_bookings,
        })
    }

    /// Stats for the calling caterer's profile
    pub async fn caterer(&self, caterer_user_id: Uuid) -> Result<CatererDashboardDto> {
        let profile_id =
            sqlx::query_scalar::<_, Uuid>("SELECT id FROM caterer_profiles WHERE user_id = $1")
                .bind(caterer_user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?
                .ok_or_else(|| AppError::NotFound("Caterer profile not found".to_string()))?;

        let (counts, total_revenue) = self.booking_stats(Some(profile_id)).await?;
        let recent_bookings = self.recent_bookings(Some(profile_id)).await?;

        Ok(CatererDashboardDto {
            bookings_by_status: counts,
            total_revenue,
            recent_bookings: recent_bookings.into_iter().map(|b| b.into()).collect(),
        })
    }

    /// Platform-wide stats for admins
    pub async fn admin(&self) -> Result<AdminDashboardDto> {
        let (total_users, total_customers, total_caterers) =
            sqlx::query_as::<_, (i64, i64, i64)>(
                r#"
                SELECT COUNT(*),
                       COUNT(*) FILTER (WHERE role = 'customer'),
                       COUNT(*) FILTER (WHERE role = 'caterer')
                FROM users
                "#,
            )
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let (counts, total_revenue) = self.booking_stats(None).await?;
        let total_bookings = counts.pending + counts.confirmed + counts.completed + counts.cancelled;
        let recent_bookings = self.recent_bookings(None).await?;

        Ok(AdminDashboardDto {
            total_users,
            total_customers,
            total_caterers,
            total_bookings,
            bookings_by_status: counts,
            total_revenue,
            recent_bookings: recent_bookings.into_iter().map(|b| b.into()).collect(),
        })
    }

    /// Per-status booking counts and completed revenue, optionally
    /// scoped to one caterer profile
    async fn booking_stats(
        &self,
        caterer_id: Option<Uuid>,
    ) -> Result<(BookingStatusCountsDto, Decimal)> {
        let row = sqlx::query_as::<_, (i64, i64, i64, i64, Decimal)>(
            r#"
            SELECT COUNT(*) FILTER (WHERE status = 'pending'),
                   COUNT(*) FILTER (WHERE status = 'confirmed'),
                   COUNT(*) FILTER (WHERE status = 'completed'),
                   COUNT(*) FILTER (WHERE status = 'cancelled'),
                   COALESCE(SUM(total_amount) FILTER (WHERE status = 'completed'), 0)
            FROM bookings
            WHERE ($1::uuid IS NULL OR caterer_id = $1)
            "#,
        )
        .bind(caterer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to compute booking stats: {:?}", e);
            AppError::Database(e)
        })?;

        let (pending, confirmed, completed, cancelled, revenue) = row;
        Ok((
            BookingStatusCountsDto {
                pending,
                confirmed,
                completed,
                cancelled,
            },
            revenue,
        ))
    }

    async fn recent_bookings(&self, caterer_id: Option<Uuid>) -> Result<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, customer_id, caterer_id, event_name, event_date, event_time,
                   location, number_of_guests, special_requests, status, total_amount,
                   created_at, updated_at
            FROM bookings
            WHERE ($1::uuid IS NULL OR caterer_id = $1)
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(caterer_id)
        .bind(RECENT_BOOKING_LIMIT)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
