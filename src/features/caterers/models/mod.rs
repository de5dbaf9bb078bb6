mod caterer_profile;

pub use caterer_profile::{default_company_name, CatererProfile};
