use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::menu::handlers::{category_handler, menu_item_handler};
use crate::features::menu::services::{CategoryService, MenuItemService};

/// Create routes for the menu feature (requires caterer authentication)
pub fn routes(categories: Arc<CategoryService>, items: Arc<MenuItemService>) -> Router {
    let category_routes = Router::new()
        .route(
            "/api/menu/categories",
            get(category_handler::list_categories).post(category_handler::create_category),
        )
        .route(
            "/api/menu/categories/{id}",
            axum::routing::put(category_handler::update_category)
                .delete(category_handler::delete_category),
        )
        .with_state(categories);

    let item_routes = Router::new()
        .route(
            "/api/menu/items",
            get(menu_item_handler::list_menu_items).post(menu_item_handler::create_menu_item),
        )
        .route(
            "/api/menu/items/{id}",
            axum::routing::put(menu_item_handler::update_menu_item)
                .delete(menu_item_handler::delete_menu_item),
        )
        .with_state(items);

    category_routes.merge(item_routes)
}
