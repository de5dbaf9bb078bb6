mod caterer_dto;

pub use caterer_dto::{
    CatererDetailDto, CatererResponseDto, ListCaterersQuery, MenuByMealTypeDto,
    UpdateCatererProfileDto, VerifyCatererDto,
};
