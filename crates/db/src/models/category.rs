//! Project categories.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use voltcom_core::types::{DbId, Timestamp};

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for adding a category. The name is normalized before insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
}
