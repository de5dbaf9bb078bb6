/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Number of featured caterers shown on the home dashboard
pub const FEATURED_CATERER_LIMIT: i64 = 6;

/// Number of recent bookings shown on the caterer and admin dashboards
pub const RECENT_BOOKING_LIMIT: i64 = 10;

/// Number of recent reviews shown on the public caterer detail view
pub const RECENT_REVIEW_LIMIT: i64 = 5;
