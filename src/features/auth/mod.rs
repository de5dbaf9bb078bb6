//! Registration, login, and role-gated access.
//!
//! Tokens are issued locally (HS256) at registration/login; the bearer
//! middleware validates them and injects an [`model::AuthenticatedUser`]
//! into request extensions, which the role guards then check.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/auth/register` | No | Create account with chosen role |
//! | POST | `/api/auth/login` | No | Verify credentials, issue token |

pub mod dtos;
pub mod guards;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod services;
