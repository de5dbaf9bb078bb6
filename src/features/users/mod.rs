//! User directory and self-service profile management.
//!
//! One user model shared by the three marketplace roles. The role is
//! assigned at registration and has no transition path afterwards.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/users/me` | Yes | Get own profile |
//! | PUT | `/api/users/me` | Yes | Update own profile |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UserService;
