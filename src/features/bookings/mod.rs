//! Booking workflow: event bookings with line items, derived totals,
//! and a four-state lifecycle.
//!
//! States: `pending -> confirmed -> completed`, with `pending ->
//! cancelled`. Completed and cancelled are terminal. Line items and
//! totals only change while pending; confirm locks the price by
//! scaling the item total by the guest count.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/bookings` | Customer | Create a pending booking |
//! | GET | `/api/bookings` | Customer | List own bookings |
//! | GET | `/api/bookings/caterer` | Caterer | List bookings for own profile |
//! | GET | `/api/bookings/{id}` | Owner/Admin | Booking detail with lines |
//! | POST | `/api/bookings/{id}/items` | Customer | Add or increment a line |
//! | DELETE | `/api/bookings/{id}/items/{item_id}` | Customer | Remove a line |
//! | POST | `/api/bookings/{id}/confirm` | Customer | Confirm and price-lock |
//! | POST | `/api/bookings/{id}/cancel` | Customer | Cancel while pending |
//! | PUT | `/api/bookings/{id}/status` | Caterer | Advance the lifecycle |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::BookingService;
