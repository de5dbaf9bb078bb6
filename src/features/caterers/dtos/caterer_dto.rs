use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::caterers::models::CatererProfile;
use crate::features::menu::dtos::MenuItemResponseDto;
use crate::features::menu::models::MealType;
use crate::features::reviews::dtos::ReviewResponseDto;

/// Response DTO for caterer profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatererResponseDto {
    pub id: Uuid,
    pub company_name: String,
    pub description: String,
    pub license_number: String,
    pub service_area: String,
    pub is_verified: bool,
    pub rating: Decimal,
    pub total_bookings: i32,
}

impl From<CatererProfile> for CatererResponseDto {
    fn from(c: CatererProfile) -> Self {
        Self {
            id: c.id,
            company_name: c.company_name,
            description: c.description,
            license_number: c.license_number,
            service_area: c.service_area,
            is_verified: c.is_verified,
            rating: c.rating,
            total_bookings: c.total_bookings,
        }
    }
}

/// Menu items of one meal type, for the public caterer detail view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuByMealTypeDto {
    pub meal_type: MealType,
    pub items: Vec<MenuItemResponseDto>,
}

impl MenuByMealTypeDto {
    /// Group a flat item list by meal type, in menu order (breakfast
    /// through beverage), dropping empty groups
    pub fn group(items: Vec<MenuItemResponseDto>) -> Vec<MenuByMealTypeDto> {
        const ORDER: [MealType; 6] = [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snacks,
            MealType::Dessert,
            MealType::Beverage,
        ];

        ORDER
            .into_iter()
            .filter_map(|meal_type| {
                let group: Vec<MenuItemResponseDto> = items
                    .iter()
                    .filter(|i| i.meal_type == meal_type)
                    .cloned()
                    .collect();
                if group.is_empty() {
                    None
                } else {
                    Some(MenuByMealTypeDto {
                        meal_type,
                        items: group,
                    })
                }
            })
            .collect()
    }
}

/// Response DTO for the public caterer detail view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatererDetailDto {
    #[serde(flatten)]
    pub caterer: CatererResponseDto,
    pub menu: Vec<MenuByMealTypeDto>,
    /// Live mean of all review ratings; absent when unreviewed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<Decimal>,
    pub recent_reviews: Vec<ReviewResponseDto>,
}

/// Request DTO for updating own caterer profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCatererProfileDto {
    #[validate(length(min = 1, max = 200, message = "Company name must be 1-200 characters"))]
    pub company_name: Option<String>,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 100, message = "License number must not exceed 100 characters"))]
    pub license_number: Option<String>,

    #[validate(length(max = 200, message = "Service area must not exceed 200 characters"))]
    pub service_area: Option<String>,
}

/// Request DTO for the admin verification toggle
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCatererDto {
    pub is_verified: bool,
}

/// Query params for the public caterer list
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct ListCaterersQuery {
    /// Substring match on company name or description
    pub search: Option<String>,
    /// Substring match on service area
    pub area: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(meal_type: MealType, name: &str) -> MenuItemResponseDto {
        MenuItemResponseDto {
            id: Uuid::new_v4(),
            caterer_id: Uuid::new_v4(),
            category_id: None,
            name: name.to_string(),
            description: String::new(),
            price: Decimal::new(1000, 2),
            meal_type,
            image: None,
            is_available: true,
            is_vegetarian: false,
            is_vegan: false,
            is_gluten_free: false,
            preparation_time: 30,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_group_by_meal_type_keeps_menu_order() {
        let items = vec![
            item(MealType::Dessert, "cake"),
            item(MealType::Breakfast, "eggs"),
            item(MealType::Dessert, "pie"),
        ];

        let grouped = MenuByMealTypeDto::group(items);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].meal_type, MealType::Breakfast);
        assert_eq!(grouped[1].meal_type, MealType::Dessert);
        assert_eq!(grouped[1].items.len(), 2);
    }

    #[test]
    fn test_group_empty_menu() {
        assert!(MenuByMealTypeDto::group(vec![]).is_empty());
    }
}
