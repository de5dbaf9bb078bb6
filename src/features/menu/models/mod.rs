mod category;
mod menu_item;

pub use category::MenuCategory;
pub use menu_item::{MealType, MenuItem};
