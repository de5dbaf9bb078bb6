pub mod review_handler;
