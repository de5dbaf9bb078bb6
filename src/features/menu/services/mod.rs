mod category_service;
mod menu_item_service;

pub use category_service::CategoryService;
pub use menu_item_service::MenuItemService;
