//! Services offered by the contractor.
//!
//! The `icon` column is free text in the store; [`ServiceRow`] is converted
//! into [`Service`] so only known [`ServiceIcon`] names reach callers.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use voltcom_core::error::CoreError;
use voltcom_core::service::ServiceIcon;
use voltcom_core::types::{DbId, Timestamp};

/// A raw row from the `services` table.
#[derive(Debug, Clone, FromRow)]
pub struct ServiceRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub display_order: i32,
    pub is_visible: bool,
    pub created_at: Timestamp,
}

/// A service with its icon resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub icon: ServiceIcon,
    pub display_order: i32,
    pub is_visible: bool,
    pub created_at: Timestamp,
}

impl TryFrom<ServiceRow> for Service {
    type Error = CoreError;

    fn try_from(row: ServiceRow) -> Result<Self, Self::Error> {
        Ok(Service {
            icon: row.icon.parse()?,
            id: row.id,
            title: row.title,
            description: row.description,
            display_order: row.display_order,
            is_visible: row.is_visible,
            created_at: row.created_at,
        })
    }
}

/// DTO for adding a service.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateService {
    #[validate(length(min = 1, max = 200, message = "must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, max = 5000, message = "must not be empty"))]
    pub description: String,
    pub icon: ServiceIcon,
    pub display_order: Option<i32>,
    pub is_visible: Option<bool>,
}

/// DTO for patching a service. Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateService {
    #[validate(length(min = 1, max = 200, message = "must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 5000, message = "must not be empty"))]
    pub description: Option<String>,
    pub icon: Option<ServiceIcon>,
    pub display_order: Option<i32>,
    pub is_visible: Option<bool>,
}
