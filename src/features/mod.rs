pub mod auth;
pub mod bookings;
pub mod caterers;
pub mod dashboard;
pub mod menu;
pub mod reviews;
pub mod users;
