use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for caterer profile.
///
/// `rating` and `total_bookings` are derived: the rating is recomputed
/// when a review lands, the booking counter when a booking enters
/// confirmed or completed.
#[derive(Debug, Clone, FromRow)]
pub struct CatererProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_name: String,
    pub description: String,
    pub license_number: String,
    pub service_area: String,
    pub is_verified: bool,
    pub rating: Decimal,
    pub total_bookings: i32,
}

/// Company name assigned when a caterer profile is provisioned without
/// an explicit name
pub fn default_company_name(username: &str) -> String {
    format!("{}'s Catering", username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_company_name() {
        assert_eq!(default_company_name("alice"), "alice's Catering");
    }
}
