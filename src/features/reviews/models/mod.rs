mod review;

pub use review::{check_review_allowed, mean_rating, ReviewRejection, ReviewWithCustomer};
