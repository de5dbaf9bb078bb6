mod caterer_service;

pub use caterer_service::CatererService;
