use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{self, dtos as auth_dtos};
use crate::features::bookings::{dtos as bookings_dtos, handlers as bookings_handlers, models as bookings_models};
use crate::features::caterers::{dtos as caterers_dtos, handlers as caterers_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::menu::{dtos as menu_dtos, handlers as menu_handlers, models as menu_models};
use crate::features::reviews::{dtos as reviews_dtos, handlers as reviews_handlers};
use crate::features::users::{dtos as users_dtos, handlers::profile_handler, models as users_models};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::auth_handler::register,
        auth::handlers::auth_handler::login,
        // Users
        profile_handler::get_profile,
        profile_handler::update_profile,
        // Caterers
        caterers_handlers::caterer_handler::list_caterers,
        caterers_handlers::caterer_handler::get_caterer,
        caterers_handlers::caterer_handler::get_own_profile,
        caterers_handlers::caterer_handler::update_own_profile,
        caterers_handlers::caterer_handler::verify_caterer,
        // Menu
        menu_handlers::category_handler::list_categories,
        menu_handlers::category_handler::create_category,
        menu_handlers::category_handler::update_category,
        menu_handlers::category_handler::delete_category,
        menu_handlers::menu_item_handler::list_menu_items,
        menu_handlers::menu_item_handler::create_menu_item,
        menu_handlers::menu_item_handler::update_menu_item,
        menu_handlers::menu_item_handler::delete_menu_item,
        // Bookings
        bookings_handlers::booking_handler::create_booking,
        bookings_handlers::booking_handler::list_bookings,
        bookings_handlers::booking_handler::list_caterer_bookings,
        bookings_handlers::booking_handler::get_booking,
        bookings_handlers::booking_handler::add_booking_item,
        bookings_handlers::booking_handler::remove_booking_item,
        bookings_handlers::booking_handler::confirm_booking,
        bookings_handlers::booking_handler::cancel_booking,
        bookings_handlers::booking_handler::update_booking_status,
        // Reviews
        reviews_handlers::review_handler::create_review,
        reviews_handlers::review_handler::list_caterer_reviews,
        // Dashboards
        dashboard_handlers::dashboard_handler::home_dashboard,
        dashboard_handlers::dashboard_handler::caterer_dashboard,
        dashboard_handlers::dashboard_handler::admin_dashboard,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::model::AuthenticatedUser,
            auth_dtos::RegisterDto,
            auth_dtos::LoginDto,
            auth_dtos::AuthResponseDto,
            ApiResponse<auth_dtos::AuthResponseDto>,
            // Users
            users_models::UserRole,
            users_dtos::UserProfileDto,
            users_dtos::UpdateProfileDto,
            ApiResponse<users_dtos::UserProfileDto>,
            // Caterers
            caterers_dtos::CatererResponseDto,
            caterers_dtos::CatererDetailDto,
            caterers_dtos::MenuByMealTypeDto,
            caterers_dtos::UpdateCatererProfileDto,
            caterers_dtos::VerifyCatererDto,
            ApiResponse<Vec<caterers_dtos::CatererResponseDto>>,
            ApiResponse<caterers_dtos::CatererResponseDto>,
            ApiResponse<caterers_dtos::CatererDetailDto>,
            // Menu
            menu_models::MealType,
            menu_dtos::CategoryResponseDto,
            menu_dtos::CreateCategoryDto,
            menu_dtos::UpdateCategoryDto,
            menu_dtos::MenuItemResponseDto,
            menu_dtos::CreateMenuItemDto,
            menu_dtos::UpdateMenuItemDto,
            ApiResponse<Vec<menu_dtos::CategoryResponseDto>>,
            ApiResponse<menu_dtos::CategoryResponseDto>,
            ApiResponse<Vec<menu_dtos::MenuItemResponseDto>>,
            ApiResponse<menu_dtos::MenuItemResponseDto>,
            // Bookings
            bookings_models::BookingStatus,
            bookings_dtos::CreateBookingDto,
            bookings_dtos::AddItemDto,
            bookings_dtos::UpdateStatusDto,
            bookings_dtos::BookingResponseDto,
            bookings_dtos::BookingItemResponseDto,
            bookings_dtos::BookingDetailDto,
            ApiResponse<Vec<bookings_dtos::BookingResponseDto>>,
            ApiResponse<bookings_dtos::BookingResponseDto>,
            ApiResponse<bookings_dtos::BookingDetailDto>,
            // Reviews
            reviews_dtos::CreateReviewDto,
            reviews_dtos::ReviewResponseDto,
            ApiResponse<Vec<reviews_dtos::ReviewResponseDto>>,
            ApiResponse<reviews_dtos::ReviewResponseDto>,
            // Dashboards
            dashboard_dtos::BookingStatusCountsDto,
            dashboard_dtos::HomeDashboardDto,
            dashboard_dtos::CatererDashboardDto,
            dashboard_dtos::AdminDashboardDto,
            ApiResponse<dashboard_dtos::HomeDashboardDto>,
            ApiResponse<dashboard_dtos::CatererDashboardDto>,
            ApiResponse<dashboard_dtos::AdminDashboardDto>,
        )
    ),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "users", description = "Self-service profile"),
        (name = "caterers", description = "Caterer directory and profiles"),
        (name = "menu", description = "Menu categories and items"),
        (name = "bookings", description = "Booking lifecycle and line items"),
        (name = "reviews", description = "Reviews of completed bookings"),
        (name = "dashboard", description = "Aggregate views"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "SmartCater API",
        version = "0.1.0",
        description = "API documentation for SmartCater",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
