//! Repository for the `projects` table.

use sqlx::PgPool;
use voltcom_core::types::DbId;

use crate::models::project::{Project, ProjectFields};

const COLUMNS: &str = "\
    id, title, neighbourhood, category, image_url, is_placeholder, \
    created_at, updated_at";

pub struct ProjectRepo;

impl ProjectRepo {
    /// All projects, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Number of projects filed under `category`.
    pub async fn count_by_category(pool: &PgPool, category: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects WHERE category = $1")
            .bind(category)
            .fetch_one(pool)
            .await
    }

    pub async fn create(pool: &PgPool, fields: &ProjectFields) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, neighbourhood, category, image_url, is_placeholder) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&fields.title)
            .bind(&fields.neighbourhood)
            .bind(&fields.category)
            .bind(&fields.image_url)
            .bind(fields.is_placeholder())
            .fetch_one(pool)
            .await
    }

    /// Overwrite every writable column. `None` if the project is gone.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        fields: &ProjectFields,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET \
                 title = $2, \
                 neighbourhood = $3, \
                 category = $4, \
                 image_url = $5, \
                 is_placeholder = $6, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&fields.title)
            .bind(&fields.neighbourhood)
            .bind(&fields.category)
            .bind(&fields.image_url)
            .bind(fields.is_placeholder())
            .fetch_optional(pool)
            .await
    }

    /// Delete by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
