//! Dashboards: aggregate views recomputed per request.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/dashboard/home` | No | Featured caterers, categories, counts |
//! | GET | `/api/dashboard/caterer` | Caterer | Own booking stats and recents |
//! | GET | `/api/dashboard/admin` | Admin | Platform-wide stats and recents |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::DashboardService;
