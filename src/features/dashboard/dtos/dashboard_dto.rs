use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::bookings::dtos::BookingResponseDto;
use crate::features::caterers::dtos::CatererResponseDto;
use crate::features::menu::dtos::CategoryResponseDto;

/// Booking counts broken down by lifecycle state
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatusCountsDto {
    pub pending: i64,
    pub confirmed: i64,
    pub completed: i64,
    pub cancelled: i64,
}

/// Public home summary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeDashboardDto {
    /// Up to six verified caterers, busiest first
    pub featured_caterers: Vec<CatererResponseDto>,
    pub categories: Vec<CategoryResponseDto>,
    pub total_caterers: i64,
    pub total_bookings: i64,
}

/// Caterer-facing dashboard
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatererDashboardDto {
    pub bookings_by_status: BookingStatusCountsDto,
    /// Sum of completed booking totals
    pub total_revenue: Decimal,
    pub recent_bookings: Vec<BookingResponseDto>,
}

/// Admin-facing dashboard
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardDto {
    pub total_users: i64,
    pub total_customers: i64,
    pub total_caterers: i64,
    pub total_bookings: i64,
    pub bookings_by_status: BookingStatusCountsDto,
    /// Sum of completed booking totals across the platform
    pub total_revenue: Decimal,
    pub recent_bookings: Vec<BookingResponseDto>,
}
