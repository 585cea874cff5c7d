//! Contact form submissions (leads).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use voltcom_core::types::{DbId, Timestamp};

/// A row from the `contact_submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub description: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// DTO for toggling the read flag.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactSubmission {
    pub is_read: bool,
}
