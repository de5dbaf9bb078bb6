mod booking_dto;

pub use booking_dto::{
    AddItemDto, BookingDetailDto, BookingItemResponseDto, BookingResponseDto, CreateBookingDto,
    ListBookingsQuery, UpdateStatusDto,
};
