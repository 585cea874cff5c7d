//! Repository for the `contact_submissions` table.

use sqlx::PgPool;
use voltcom_core::contact::ContactFields;
use voltcom_core::types::DbId;

use crate::models::contact_submission::ContactSubmission;

const COLUMNS: &str = "id, name, phone, email, service, description, is_read, created_at";

pub struct ContactSubmissionRepo;

impl ContactSubmissionRepo {
    /// Every submission, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_submissions ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .fetch_all(pool)
            .await
    }

    /// Store one lead from the public form.
    pub async fn create(
        pool: &PgPool,
        fields: &ContactFields,
    ) -> Result<ContactSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_submissions (name, phone, email, service, description) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(&fields.name)
            .bind(&fields.phone)
            .bind(&fields.email)
            .bind(&fields.service)
            .bind(&fields.description)
            .fetch_one(pool)
            .await
    }

    pub async fn set_read(
        pool: &PgPool,
        id: DbId,
        is_read: bool,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_submissions SET is_read = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(id)
            .bind(is_read)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_submissions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
