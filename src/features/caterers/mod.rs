//! Caterer profiles: public browsing, self-service editing, and admin
//! verification.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/caterers` | No | List caterers (search/area filter) |
//! | GET | `/api/caterers/{id}` | No | Caterer detail with menu and rating |
//! | GET | `/api/caterers/me` | Caterer | Own profile (lazily created) |
//! | PUT | `/api/caterers/me` | Caterer | Update own profile |
//! | PUT | `/api/caterers/{id}/verify` | Admin | Toggle verification flag |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CatererService;
