use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::bookings::models::{Booking, BookingItemWithName, BookingStatus};

/// Response DTO for booking
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponseDto {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub caterer_id: Uuid,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub location: String,
    pub number_of_guests: i32,
    pub special_requests: String,
    pub status: BookingStatus,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponseDto {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            customer_id: b.customer_id,
            caterer_id: b.caterer_id,
            event_name: b.event_name,
            event_date: b.event_date,
            event_time: b.event_time,
            location: b.location,
            number_of_guests: b.number_of_guests,
            special_requests: b.special_requests,
            status: b.status,
            total_amount: b.total_amount,
            created_at: b.created_at,
        }
    }
}

/// Response DTO for a booking line item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingItemResponseDto {
    pub id: Uuid,
    pub menu_item_id: Uuid,
    pub menu_item_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

impl From<BookingItemWithName> for BookingItemResponseDto {
    fn from(i: BookingItemWithName) -> Self {
        Self {
            id: i.id,
            menu_item_id: i.menu_item_id,
            menu_item_name: i.menu_item_name,
            quantity: i.quantity,
            unit_price: i.unit_price,
            subtotal: i.subtotal,
        }
    }
}

/// Response DTO for the booking detail view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetailDto {
    #[serde(flatten)]
    pub booking: BookingResponseDto,
    pub items: Vec<BookingItemResponseDto>,
}

/// Request DTO for creating a booking
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub caterer_id: Uuid,

    #[validate(length(min = 1, max = 200, message = "Event name must be 1-200 characters"))]
    pub event_name: String,

    /// Must not be in the past
    pub event_date: NaiveDate,

    pub event_time: NaiveTime,

    #[validate(length(min = 1, max = 5000, message = "Location must be 1-5000 characters"))]
    pub location: String,

    #[validate(range(min = 1, max = 10000, message = "Guests must be between 1 and 10000"))]
    pub number_of_guests: i32,

    #[validate(length(max = 5000, message = "Special requests must not exceed 5000 characters"))]
    #[serde(default)]
    pub special_requests: String,
}

/// Request DTO for adding a line item to a pending booking
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddItemDto {
    pub menu_item_id: Uuid,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

/// Request DTO for the caterer-side status update
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusDto {
    pub status: BookingStatus,
}

/// Query params for booking lists
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct ListBookingsQuery {
    /// Restrict to one lifecycle state
    pub status: Option<BookingStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_dto() -> CreateBookingDto {
        CreateBookingDto {
            caterer_id: Uuid::new_v4(),
            event_name: "Office party".to_string(),
            event_date: NaiveDate::from_ymd_opt(2030, 6, 15).unwrap(),
            event_time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
            location: "12 Main St".to_string(),
            number_of_guests: 40,
            special_requests: String::new(),
        }
    }

    #[test]
    fn test_create_booking_valid() {
        assert!(base_dto().validate().is_ok());
    }

    #[test]
    fn test_create_booking_guest_bounds() {
        let mut dto = base_dto();
        dto.number_of_guests = 0;
        assert!(dto.validate().is_err());

        dto.number_of_guests = 10_001;
        assert!(dto.validate().is_err());

        dto.number_of_guests = 10_000;
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_add_item_quantity_minimum() {
        let dto = AddItemDto {
            menu_item_id: Uuid::new_v4(),
            quantity: 0,
        };
        assert!(dto.validate().is_err());

        let dto = AddItemDto {
            menu_item_id: Uuid::new_v4(),
            quantity: 1,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_add_item_defaults_to_one() {
        let dto: AddItemDto =
            serde_json::from_str(r#"{"menuItemId":"00000000-0000-0000-0000-000000000001"}"#)
                .unwrap();
        assert_eq!(dto.quantity, 1);
    }
}
