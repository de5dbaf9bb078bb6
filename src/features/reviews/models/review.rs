use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::bookings::models::BookingStatus;

/// Review row joined with the reviewing customer's username
#[derive(Debug, Clone, FromRow)]
pub struct ReviewWithCustomer {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub customer_username: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Why a review submission is rejected before insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewRejection {
    NotBookingOwner,
    BookingNotCompleted(BookingStatus),
    AlreadyReviewed,
}

/// A booking takes exactly one review, from the customer who placed
/// it, once the caterer has completed it.
pub fn check_review_allowed(
    booking_customer_id: Uuid,
    reviewer_id: Uuid,
    status: BookingStatus,
    already_reviewed: bool,
) -> Result<(), ReviewRejection> {
    if booking_customer_id != reviewer_id {
        return Err(ReviewRejection::NotBookingOwner);
    }
    if status != BookingStatus::Completed {
        return Err(ReviewRejection::BookingNotCompleted(status));
    }
    if already_reviewed {
        return Err(ReviewRejection::AlreadyReviewed);
    }
    Ok(())
}

/// Arithmetic mean of review ratings, rounded to 2 decimal places.
/// `None` for an empty set; the stored aggregate then stays 0.
pub fn mean_rating(ratings: &[i32]) -> Option<Decimal> {
    if ratings.is_empty() {
        return None;
    }

    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    let mean = Decimal::from(sum) / Decimal::from(ratings.len() as i64);
    Some(mean.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_rating_empty() {
        assert_eq!(mean_rating(&[]), None);
    }

    #[test]
    fn test_mean_rating_single() {
        assert_eq!(mean_rating(&[4]), Some(Decimal::new(400, 2)));
    }

    #[test]
    fn test_mean_rating_rounds_to_two_places() {
        // (5 + 4 + 4) / 3 = 4.333... -> 4.33
        assert_eq!(mean_rating(&[5, 4, 4]), Some(Decimal::new(433, 2)));
    }

    #[test]
    fn test_mean_rating_includes_new_submission() {
        // Prior reviews {3, 5} then a new 4: mean(3, 5, 4) = 4.00
        let prior = [3, 5];
        let mut all = prior.to_vec();
        all.push(4);
        assert_eq!(mean_rating(&all), Some(Decimal::new(400, 2)));
    }

    #[test]
    fn test_review_allowed_for_owner_of_completed_booking() {
        let owner = Uuid::new_v4();
        assert_eq!(
            check_review_allowed(owner, owner, BookingStatus::Completed, false),
            Ok(())
        );
    }

    #[test]
    fn test_review_rejects_other_customer() {
        assert_eq!(
            check_review_allowed(
                Uuid::new_v4(),
                Uuid::new_v4(),
                BookingStatus::Completed,
                false
            ),
            Err(ReviewRejection::NotBookingOwner)
        );
    }

    #[test]
    fn test_review_rejects_unfinished_booking() {
        let owner = Uuid::new_v4();
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(
                check_review_allowed(owner, owner, status, false),
                Err(ReviewRejection::BookingNotCompleted(status))
            );
        }
    }

    #[test]
    fn test_review_rejects_second_submission() {
        let owner = Uuid::new_v4();
        assert_eq!(
            check_review_allowed(owner, owner, BookingStatus::Completed, true),
            Err(ReviewRejection::AlreadyReviewed)
        );
    }

    #[test]
    fn test_ownership_rejection_wins_over_already_reviewed() {
        // A foreign caller gets the ownership rejection, not a hint
        // that the booking was already reviewed
        assert_eq!(
            check_review_allowed(
                Uuid::new_v4(),
                Uuid::new_v4(),
                BookingStatus::Completed,
                true
            ),
            Err(ReviewRejection::NotBookingOwner)
        );
    }
}
