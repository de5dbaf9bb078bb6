mod category_dto;
mod menu_item_dto;

pub use category_dto::{CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto};
pub use menu_item_dto::{
    CreateMenuItemDto, ListMenuItemsQuery, MenuItemResponseDto, UpdateMenuItemDto,
};
