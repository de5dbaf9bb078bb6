pub mod booking_handler;
