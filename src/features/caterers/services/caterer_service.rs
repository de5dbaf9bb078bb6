use std::sync::Arc;

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::caterers::dtos::{
    CatererDetailDto, CatererResponseDto, ListCaterersQuery, MenuByMealTypeDto,
    UpdateCatererProfileDto,
};
use crate::features::caterers::models::{default_company_name, CatererProfile};
use crate::features::menu::models::MenuItem;
use crate::features::reviews::services::ReviewService;
use crate::shared::constants::RECENT_REVIEW_LIMIT;

/// Service for caterer profile operations
pub struct CatererService {
    pool: PgPool,
    reviews: Arc<ReviewService>,
}

impl CatererService {
    pub fn new(pool: PgPool, reviews: Arc<ReviewService>) -> Self {
        Self { pool, reviews }
    }

    /// Public caterer directory. Only profiles of active users are
    /// listed; `search` matches company name or description, `area`
    /// matches service area.
    pub async fn list(&self, query: &ListCaterersQuery) -> Result<Vec<CatererResponseDto>> {
        let search = query
            .search
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(|s| format!("%{}%", s.trim()));
        let area = query
            .area
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(|s| format!("%{}%", s.trim()));

        let caterers = sqlx::query_as::<_, CatererProfile>(
            r#"
            SELECT cp.id, cp.user_id, cp.company_name, cp.description,
                   cp.license_number, cp.service_area, cp.is_verified,
                   cp.rating, cp.total_bookings
            FROM caterer_profiles cp
            JOIN users u ON u.id = cp.user_id
            WHERE u.is_active = TRUE
              AND ($1::text IS NULL OR cp.company_name ILIKE $1 OR cp.description ILIKE $1)
              AND ($2::text IS NULL OR cp.service_area ILIKE $2)
            ORDER BY cp.rating DESC, cp.company_name ASC
            "#,
        )
        .bind(search)
        .bind(area)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list caterers: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(caterers.into_iter().map(|c| c.into()).collect())
    }

    /// Public detail view: profile, available menu grouped by meal
    /// type, live average rating, and the most recent reviews.
    pub async fn get_detail(&self, caterer_id: Uuid) -> Result<CatererDetailDto> {
        let caterer = self.fetch_profile(caterer_id).await?;

        let items = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, caterer_id, category_id, name, description, price, meal_type,
                   image, is_available, is_vegetarian, is_vegan, is_gluten_free,
                   preparation_time, created_at, updated_at
            FROM menu_items
            WHERE caterer_id = $1 AND is_available = TRUE
            ORDER BY name ASC
            "#,
        )
        .bind(caterer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let average_rating = sqlx::query_scalar::<_, Option<Decimal>>(
            "SELECT ROUND(AVG(rating)::numeric, 2) FROM reviews WHERE caterer_id = $1",
        )
        .bind(caterer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let recent_reviews = self
            .reviews
            .recent_for_caterer(caterer_id, RECENT_REVIEW_LIMIT)
            .await?;

        Ok(CatererDetailDto {
            caterer: caterer.into(),
            menu: MenuByMealTypeDto::group(items.into_iter().map(|i| i.into()).collect()),
            average_rating,
            recent_reviews,
        })
    }

    /// Own profile for the caterer role. Provisioned lazily with the
    /// default company name if registration predates auto-provisioning.
    pub async fn get_own(&self, user_id: Uuid) -> Result<CatererResponseDto> {
        let profile = self.fetch_or_create_own(user_id).await?;
        Ok(profile.into())
    }

    /// Partial update of the own profile
    pub async fn update_own(
        &self,
        user_id: Uuid,
        dto: UpdateCatererProfileDto,
    ) -> Result<CatererResponseDto> {
        let profile = self.fetch_or_create_own(user_id).await?;

        let updated = sqlx::query_as::<_, CatererProfile>(
            r#"
            UPDATE caterer_profiles
            SET company_name = COALESCE($2, company_name),
                description = COALESCE($3, description),
                license_number = COALESCE($4, license_number),
                service_area = COALESCE($5, service_area)
            WHERE id = $1
            RETURNING id, user_id, company_name, description, license_number,
                      service_area, is_verified, rating, total_bookings
            "#,
        )
        .bind(profile.id)
        .bind(dto.company_name)
        .bind(dto.description)
        .bind(dto.license_number)
        .bind(dto.service_area)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update caterer profile: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(updated.into())
    }

    /// Admin verification toggle
    pub async fn set_verified(
        &self,
        caterer_id: Uuid,
        is_verified: bool,
    ) -> Result<CatererResponseDto> {
        let updated = sqlx::query_as::<_, CatererProfile>(
            r#"
            UPDATE caterer_profiles
            SET is_verified = $2
            WHERE id = $1
            RETURNING id, user_id, company_name, description, license_number,
                      service_area, is_verified, rating, total_bookings
            "#,
        )
        .bind(caterer_id)
        .bind(is_verified)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Caterer '{}' not found", caterer_id)))?;

        tracing::info!(
            "Caterer verification set: id={}, is_verified={}",
            caterer_id,
            is_verified
        );

        Ok(updated.into())
    }

    async fn fetch_profile(&self, caterer_id: Uuid) -> Result<CatererProfile> {
        sqlx::query_as::<_, CatererProfile>(
            r#"
            SELECT id, user_id, company_name, description, license_number,
                   service_area, is_verified, rating, total_bookings
            FROM caterer_profiles
            WHERE id = $1
            "#,
        )
        .bind(caterer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Caterer '{}' not found", caterer_id)))
    }

    async fn fetch_or_create_own(&self, user_id: Uuid) -> Result<CatererProfile> {
        let existing = sqlx::query_as::<_, CatererProfile>(
            r#"
            SELECT id, user_id, company_name, description, license_number,
                   service_area, is_verified, rating, total_bookings
            FROM caterer_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if let Some(profile) = existing {
            return Ok(profile);
        }

        let username = sqlx::query_scalar::<_, String>("SELECT username FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", user_id)))?;

        let profile = sqlx::query_as::<_, CatererProfile>(
            r#"
            INSERT INTO caterer_profiles (user_id, company_name)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING id, user_id, company_name, description, license_number,
                      service_area, is_verified, rating, total_bookings
            "#,
        )
        .bind(user_id)
        .bind(default_company_name(&username))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to provision caterer profile: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(profile)
    }
}
