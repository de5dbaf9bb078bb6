mod booking;
mod booking_item;

pub use booking::{
    confirm_total, items_total, per_guest_total, Booking, BookingStatus, MutationRejection,
};
pub use booking_item::{line_subtotal, BookingItemWithName};
