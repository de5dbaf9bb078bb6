//! Review ledger: one review per completed booking, feeding the
//! caterer's aggregate rating.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/bookings/{id}/reviews` | Customer | Review a completed booking |
//! | GET | `/api/caterers/{id}/reviews` | No | List a caterer's reviews |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ReviewService;
