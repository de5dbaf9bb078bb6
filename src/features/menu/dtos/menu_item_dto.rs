use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::menu::models::{MealType, MenuItem};

/// Response DTO for menu item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemResponseDto {
    pub id: Uuid,
    pub caterer_id: Uuid,
    pub category_id: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub meal_type: MealType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub is_available: bool,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    /// Preparation time in minutes
    pub preparation_time: i32,
    pub created_at: DateTime<Utc>,
}

impl From<MenuItem> for MenuItemResponseDto {
    fn from(i: MenuItem) -> Self {
        Self {
            id: i.id,
            caterer_id: i.caterer_id,
            category_id: i.category_id,
            name: i.name,
            description: i.description,
            price: i.price,
            meal_type: i.meal_type,
            image: i.image,
            is_available: i.is_available,
            is_vegetarian: i.is_vegetarian,
            is_vegan: i.is_vegan,
            is_gluten_free: i.is_gluten_free,
            preparation_time: i.preparation_time,
            created_at: i.created_at,
        }
    }
}

/// Request DTO for creating a menu item.
///
/// Price non-negativity is checked in the service since `Decimal` is not
/// covered by the derive's range validator.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItemDto {
    /// Must reference an active category when set
    pub category_id: Option<Uuid>,

    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(max = 2000, message = "Description must not exceed 2000 characters"))]
    #[serde(default)]
    pub description: String,

    pub price: Decimal,

    pub meal_type: MealType,

    #[validate(length(max = 500, message = "Image reference must not exceed 500 characters"))]
    pub image: Option<String>,

    #[serde(default = "default_true")]
    pub is_available: bool,

    #[serde(default)]
    pub is_vegetarian: bool,

    #[serde(default)]
    pub is_vegan: bool,

    #[serde(default)]
    pub is_gluten_free: bool,

    /// Preparation time in minutes
    #[validate(range(min = 1, max = 1440, message = "Preparation time must be 1-1440 minutes"))]
    #[serde(default = "default_preparation_time")]
    pub preparation_time: i32,
}

fn default_true() -> bool {
    true
}

fn default_preparation_time() -> i32 {
    30
}

/// Request DTO for updating a menu item
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuItemDto {
    pub category_id: Option<Uuid>,

    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 2000, message = "Description must not exceed 2000 characters"))]
    pub description: Option<String>,

    pub price: Option<Decimal>,

    pub meal_type: Option<MealType>,

    #[validate(length(max = 500, message = "Image reference must not exceed 500 characters"))]
    pub image: Option<String>,

    pub is_available: Option<bool>,
    pub is_vegetarian: Option<bool>,
    pub is_vegan: Option<bool>,
    pub is_gluten_free: Option<bool>,

    #[validate(range(min = 1, max = 1440, message = "Preparation time must be 1-1440 minutes"))]
    pub preparation_time: Option<i32>,
}

/// Query params for listing own menu items
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListMenuItemsQuery {
    /// Filter by availability when set
    pub available: Option<bool>,
}
