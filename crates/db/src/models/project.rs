//! Portfolio projects and their DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use voltcom_core::error::CoreError;
use voltcom_core::project::{is_placeholder, normalize_image_url, validate_image_url};
use voltcom_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub neighbourhood: String,
    pub category: String,
    pub image_url: Option<String>,
    pub is_placeholder: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating a project.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[validate(length(min = 1, max = 200, message = "must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, max = 200, message = "must not be empty"))]
    pub neighbourhood: String,
    #[validate(length(min = 1, max = 100, message = "must not be empty"))]
    pub category: String,
    pub image_url: Option<String>,
}

/// DTO for patching a project. `imageUrl: ""` removes the image.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[validate(length(min = 1, max = 200, message = "must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 200, message = "must not be empty"))]
    pub neighbourhood: Option<String>,
    #[validate(length(min = 1, max = 100, message = "must not be empty"))]
    pub category: Option<String>,
    pub image_url: Option<String>,
}

/// The full set of writable columns, with the placeholder flag derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFields {
    pub title: String,
    pub neighbourhood: String,
    pub category: String,
    pub image_url: Option<String>,
}

impl ProjectFields {
    pub fn is_placeholder(&self) -> bool {
        is_placeholder(self.image_url.as_deref())
    }

    fn checked(self) -> Result<Self, CoreError> {
        if let Some(url) = &self.image_url {
            validate_image_url(url)?;
        }
        Ok(self)
    }
}

impl TryFrom<CreateProject> for ProjectFields {
    type Error = CoreError;

    fn try_from(input: CreateProject) -> Result<Self, Self::Error> {
        input.validate()?;
        ProjectFields {
            title: input.title.trim().to_string(),
            neighbourhood: input.neighbourhood.trim().to_string(),
            category: input.category.trim().to_string(),
            image_url: normalize_image_url(input.image_url),
        }
        .checked()
    }
}

impl UpdateProject {
    /// Merge the patch over an existing row.
    pub fn apply_to(self, existing: &Project) -> Result<ProjectFields, CoreError> {
        self.validate()?;
        ProjectFields {
            title: self
                .title
                .map(|t| t.trim().to_string())
                .unwrap_or_else(|| existing.title.clone()),
            neighbourhood: self
                .neighbourhood
                .map(|n| n.trim().to_string())
                .unwrap_or_else(|| existing.neighbourhood.clone()),
            category: self
                .category
                .map(|c| c.trim().to_string())
                .unwrap_or_else(|| existing.category.clone()),
            image_url: match self.image_url {
                Some(url) => normalize_image_url(Some(url)),
                None => existing.image_url.clone(),
            },
        }
        .checked()
    }
}
