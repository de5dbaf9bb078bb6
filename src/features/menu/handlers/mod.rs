pub mod category_handler;
pub mod menu_item_handler;
