//! Customer reviews.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use voltcom_core::review::{MAX_RATING, MIN_RATING};
use voltcom_core::types::{DbId, Timestamp};

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: DbId,
    pub author: String,
    pub neighbourhood: String,
    pub rating: i16,
    pub quote: String,
    pub is_visible: bool,
    pub created_at: Timestamp,
}

/// DTO for adding a review.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    #[validate(length(min = 1, max = 100, message = "must not be empty"))]
    pub author: String,
    #[serde(default)]
    pub neighbourhood: String,
    #[validate(range(min = MIN_RATING, max = MAX_RATING, message = "must be between 1 and 5"))]
    pub rating: i16,
    #[validate(length(min = 1, max = 2000, message = "must not be empty"))]
    pub quote: String,
    pub is_visible: Option<bool>,
}

/// DTO for patching a review. Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReview {
    #[validate(length(min = 1, max = 100, message = "must not be empty"))]
    pub author: Option<String>,
    pub neighbourhood: Option<String>,
    #[validate(range(min = MIN_RATING, max = MAX_RATING, message = "must be between 1 and 5"))]
    pub rating: Option<i16>,
    #[validate(length(min = 1, max = 2000, message = "must not be empty"))]
    pub quote: Option<String>,
    pub is_visible: Option<bool>,
}
