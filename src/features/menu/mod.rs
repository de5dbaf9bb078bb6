//! Menu catalog: categories and the items caterers offer.
//!
//! Categories are shared across caterers and soft-disabled via
//! `is_active` rather than deleted; a hard delete detaches items to "no
//! category". Items belong to exactly one caterer.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/menu/categories` | Caterer | List all categories |
//! | POST | `/api/menu/categories` | Caterer | Create category |
//! | PUT | `/api/menu/categories/{id}` | Caterer | Update category |
//! | DELETE | `/api/menu/categories/{id}` | Caterer | Delete category (detaches items) |
//! | GET | `/api/menu/items` | Caterer | List own items (availability filter) |
//! | POST | `/api/menu/items` | Caterer | Create item |
//! | PUT | `/api/menu/items/{id}` | Caterer | Update own item |
//! | DELETE | `/api/menu/items/{id}` | Caterer | Delete own item |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{CategoryService, MenuItemService};
