use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::menu::dtos::{
    CreateMenuItemDto, ListMenuItemsQuery, MenuItemResponseDto, UpdateMenuItemDto,
};
use crate::features::menu::models::MenuItem;

/// Service for menu item operations, always scoped to the owning caterer
pub struct MenuItemService {
    pool: PgPool,
}

impl MenuItemService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolve the caterer profile id for an authenticated caterer user
    async fn profile_id_for_user(&self, user_id: Uuid) -> Result<Uuid> {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM caterer_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Caterer profile not found".to_string()))
    }

    /// List the caller's own menu items, optionally filtered by availability
    pub async fn list_own(
        &self,
        user_id: Uuid,
        query: &ListMenuItemsQuery,
    ) -> Result<Vec<MenuItemResponseDto>> {
        let caterer_id = self.profile_id_for_user(user_id).await?;

        let items = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, caterer_id, category_id, name, description, price, meal_type,
                   image, is_available, is_vegetarian, is_vegan, is_gluten_free,
                   preparation_time, created_at, updated_at
            FROM menu_items
            WHERE caterer_id = $1 AND ($2::boolean IS NULL OR is_available = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(caterer_id)
        .bind(query.available)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list menu items: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(items.into_iter().map(|i| i.into()).collect())
    }

    /// Create a menu item owned by the caller
    pub async fn create(&self, user_id: Uuid, dto: CreateMenuItemDto) -> Result<MenuItemResponseDto> {
        let caterer_id = self.profile_id_for_user(user_id).await?;

        if dto.price < Decimal::ZERO {
            return Err(AppError::Validation(
                "Price must not be negative".to_string(),
            ));
        }

        if let Some(category_id) = dto.category_id {
            self.ensure_active_category(category_id).await?;
        }

        let item = sqlx::query_as::<_, MenuItem>(
            r#"
            INSERT INTO menu_items (
                caterer_id, category_id, name, description, price, meal_type,
                image, is_available, is_vegetarian, is_vegan, is_gluten_free,
                preparation_time
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, caterer_id, category_id, name, description, price, meal_type,
                      image, is_available, is_vegetarian, is_vegan, is_gluten_free,
                      preparation_time, created_at, updated_at
            "#,
        )
        .bind(caterer_id)
        .bind(dto.category_id)
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.price)
        .bind(dto.meal_type)
        .bind(&dto.image)
        .bind(dto.is_available)
        .bind(dto.is_vegetarian)
        .bind(dto.is_vegan)
        .bind(dto.is_gluten_free)
        .bind(dto.preparation_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create menu item: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Menu item created: id={}, caterer={}, name={}",
            item.id,
            caterer_id,
            item.name
        );

        Ok(item.into())
    }

    /// Update an item; only the owning caterer may do this
    pub async fn update(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        dto: UpdateMenuItemDto,
    ) -> Result<MenuItemResponseDto> {
        let caterer_id = self.profile_id_for_user(user_id).await?;
        let item = self.fetch_item(item_id).await?;

        if item.caterer_id != caterer_id {
            return Err(AppError::Forbidden(
                "You don't have permission to edit this item".to_string(),
            ));
        }

        if let Some(price) = dto.price {
            if price < Decimal::ZERO {
                return Err(AppError::Validation(
                    "Price must not be negative".to_string(),
                ));
            }
        }

        if let Some(category_id) = dto.category_id {
            self.ensure_active_category(category_id).await?;
        }

        let updated = sqlx::query_as::<_, MenuItem>(
            r#"
            UPDATE menu_items SET
                category_id = COALESCE($2, category_id),
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                price = COALESCE($5, price),
                meal_type = COALESCE($6, meal_type),
                image = COALESCE($7, image),
                is_available = COALESCE($8, is_available),
                is_vegetarian = COALESCE($9, is_vegetarian),
                is_vegan = COALESCE($10, is_vegan),
                is_gluten_free = COALESCE($11, is_gluten_free),
                preparation_time = COALESCE($12, preparation_time),
                updated_at = now()
            WHERE id = $1
            RETURNING id, caterer_id, category_id, name, description, price, meal_type,
                      image, is_available, is_vegetarian, is_vegan, is_gluten_free,
                      preparation_time, created_at, updated_at
            "#,
        )
        .bind(item_id)
        .bind(dto.category_id)
        .bind(dto.name)
        .bind(dto.description)
        .bind(dto.price)
        .bind(dto.meal_type)
        .bind(dto.image)
        .bind(dto.is_available)
        .bind(dto.is_vegetarian)
        .bind(dto.is_vegan)
        .bind(dto.is_gluten_free)
        .bind(dto.preparation_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update menu item: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(updated.into())
    }

    /// Delete an item; only the owning caterer may do this. Existing
    /// booking lines keep their price snapshot regardless.
    pub async fn delete(&self, user_id: Uuid, item_id: Uuid) -> Result<()> {
        let caterer_id = self.profile_id_for_user(user_id).await?;
        let item = self.fetch_item(item_id).await?;

        if item.caterer_id != caterer_id {
            return Err(AppError::Forbidden(
                "You don't have permission to delete this item".to_string(),
            ));
        }

        sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(item_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete menu item: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Menu item deleted: id={}", item_id);

        Ok(())
    }

    async fn fetch_item(&self, item_id: Uuid) -> Result<MenuItem> {
        sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, caterer_id, category_id, name, description, price, meal_type,
                   image, is_available, is_vegetarian, is_vegan, is_gluten_free,
                   preparation_time, created_at, updated_at
            FROM menu_items
            WHERE id = $1
            "#,
        )
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Menu item '{}' not found", item_id)))
    }

    async fn ensure_active_category(&self, category_id: Uuid) -> Result<()> {
        let active =
            sqlx::query_scalar::<_, bool>("SELECT is_active FROM menu_categories WHERE id = $1")
                .bind(category_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?;

        match active {
            Some(true) => Ok(()),
            Some(false) => Err(AppError::Validation(
                "Category is inactive and cannot be assigned".to_string(),
            )),
            None => Err(AppError::NotFound(format!(
                "Category '{}' not found",
                category_id
            ))),
        }
    }
}
