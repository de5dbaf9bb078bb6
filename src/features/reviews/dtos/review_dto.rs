use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::reviews::models::ReviewWithCustomer;

/// Response DTO for review
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponseDto {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub customer_username: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<ReviewWithCustomer> for ReviewResponseDto {
    fn from(r: ReviewWithCustomer) -> Self {
        Self {
            id: r.id,
            booking_id: r.booking_id,
            customer_username: r.customer_username,
            rating: r.rating,
            comment: r.comment,
            created_at: r.created_at,
        }
    }
}

/// Request DTO for submitting a review
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewDto {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,

    #[validate(length(max = 5000, message = "Comment must not exceed 5000 characters"))]
    #[serde(default)]
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_rating_bounds() {
        let valid = CreateReviewDto {
            rating: 5,
            comment: String::new(),
        };
        assert!(valid.validate().is_ok());

        let too_low = CreateReviewDto {
            rating: 0,
            comment: String::new(),
        };
        assert!(too_low.validate().is_err());

        let too_high = CreateReviewDto {
            rating: 6,
            comment: String::new(),
        };
        assert!(too_high.validate().is_err());
    }
}
