use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Booking lifecycle state matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Legal lifecycle transitions. Completed and cancelled are
    /// terminal; nothing re-enters pending.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Completed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Confirmed => write!(f, "confirmed"),
            BookingStatus::Completed => write!(f, "completed"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Database model for booking
#[derive(Debug, Clone, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub caterer_id: Uuid,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub location: String,
    pub number_of_guests: i32,
    pub special_requests: String,
    pub status: BookingStatus,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Why a customer-side mutation on a booking is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationRejection {
    NotOwner,
    NotPending(BookingStatus),
}

impl Booking {
    /// Preconditions shared by every customer-side mutation: the
    /// caller owns the booking and the booking is still pending.
    /// Ownership is checked first so a foreign caller learns nothing
    /// about the booking's state.
    pub fn check_customer_mutation(&self, customer_id: Uuid) -> Result<(), MutationRejection> {
        if self.customer_id != customer_id {
            return Err(MutationRejection::NotOwner);
        }
        if self.status != BookingStatus::Pending {
            return Err(MutationRejection::NotPending(self.status));
        }
        Ok(())
    }
}

/// Sum of line subtotals while the booking is pending
pub fn items_total(subtotals: &[Decimal]) -> Decimal {
    subtotals.iter().copied().sum()
}

/// Price-locked total applied at customer confirm: the item total
/// scaled by the guest count
pub fn per_guest_total(item_total: Decimal, number_of_guests: i32) -> Decimal {
    item_total * Decimal::from(number_of_guests)
}

/// Total a confirm would lock in, or None when the booking has no
/// lines and cannot be confirmed at all
pub fn confirm_total(subtotals: &[Decimal], number_of_guests: i32) -> Option<Decimal> {
    if subtotals.is_empty() {
        return None;
    }
    Some(per_guest_total(items_total(subtotals), number_of_guests))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_transitions() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Completed));
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Pending));
    }

    #[test]
    fn test_confirmed_transitions() {
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Completed));
        assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Cancelled));
        assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Pending));
    }

    #[test]
    fn test_terminal_states_admit_nothing() {
        for terminal in [BookingStatus::Completed, BookingStatus::Cancelled] {
            assert!(terminal.is_terminal());
            for next in [
                BookingStatus::Pending,
                BookingStatus::Confirmed,
                BookingStatus::Completed,
                BookingStatus::Cancelled,
            ] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn test_items_total() {
        assert_eq!(items_total(&[]), Decimal::ZERO);

        let subtotals = [Decimal::new(2500, 2), Decimal::new(1050, 2)];
        assert_eq!(items_total(&subtotals), Decimal::new(3550, 2));
    }

    #[test]
    fn test_per_guest_total() {
        // 35.50 * 40 guests = 1420.00
        let item_total = Decimal::new(3550, 2);
        assert_eq!(per_guest_total(item_total, 40), Decimal::new(142_000, 2));
    }

    #[test]
    fn test_per_guest_total_single_guest_is_identity() {
        let item_total = Decimal::new(9999, 2);
        assert_eq!(per_guest_total(item_total, 1), item_total);
    }

    fn booking_with(customer_id: Uuid, status: BookingStatus) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            customer_id,
            caterer_id: Uuid::new_v4(),
            event_name: "Garden Wedding".to_string(),
            event_date: NaiveDate::from_ymd_opt(2030, 6, 15).unwrap(),
            event_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            location: "Riverside Hall".to_string(),
            number_of_guests: 50,
            special_requests: String::new(),
            status,
            total_amount: Decimal::ZERO,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_customer_mutation_allowed_for_owner_while_pending() {
        let owner = Uuid::new_v4();
        let booking = booking_with(owner, BookingStatus::Pending);
        assert_eq!(booking.check_customer_mutation(owner), Ok(()));
    }

    #[test]
    fn test_customer_mutation_rejects_other_customer() {
        let booking = booking_with(Uuid::new_v4(), BookingStatus::Pending);
        assert_eq!(
            booking.check_customer_mutation(Uuid::new_v4()),
            Err(MutationRejection::NotOwner)
        );
    }

    #[test]
    fn test_customer_mutation_rejects_non_pending() {
        let owner = Uuid::new_v4();
        for status in [
            BookingStatus::Confirmed,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            let booking = booking_with(owner, status);
            assert_eq!(
                booking.check_customer_mutation(owner),
                Err(MutationRejection::NotPending(status))
            );
        }
    }

    #[test]
    fn test_ownership_checked_before_status() {
        // A foreign caller is rejected as NotOwner even on a completed
        // booking, so the response never leaks the booking's state
        let booking = booking_with(Uuid::new_v4(), BookingStatus::Completed);
        assert_eq!(
            booking.check_customer_mutation(Uuid::new_v4()),
            Err(MutationRejection::NotOwner)
        );
    }

    #[test]
    fn test_confirm_total_rejects_empty_booking() {
        assert_eq!(confirm_total(&[], 50), None);
    }

    #[test]
    fn test_confirm_total_scales_by_guests() {
        let subtotals = [Decimal::new(2500, 2), Decimal::new(1050, 2)];
        // (25.00 + 10.50) * 50 guests = 1775.00
        assert_eq!(confirm_total(&subtotals, 50), Some(Decimal::new(177_500, 2)));
    }
}
