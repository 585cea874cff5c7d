//! Repository for the `reviews` table.

use sqlx::PgPool;
use voltcom_core::types::DbId;

use crate::models::review::{CreateReview, Review, UpdateReview};

const COLUMNS: &str = "id, author, neighbourhood, rating, quote, is_visible, created_at";

pub struct ReviewRepo;

impl ReviewRepo {
    /// Every review, newest first (admin listing).
    pub async fn list(pool: &PgPool) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Review>(&query).fetch_all(pool).await
    }

    /// Visible reviews only, newest first (public listing).
    pub async fn list_visible(pool: &PgPool) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews WHERE is_visible = TRUE \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Review>(&query).fetch_all(pool).await
    }

    pub async fn create(pool: &PgPool, dto: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (author, neighbourhood, rating, quote, is_visible) \
             VALUES ($1, $2, $3, $4, COALESCE($5, TRUE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(dto.author.trim())
            .bind(dto.neighbourhood.trim())
            .bind(dto.rating)
            .bind(dto.quote.trim())
            .bind(dto.is_visible)
            .fetch_one(pool)
            .await
    }

    /// Partially update a review.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateReview,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "UPDATE reviews SET \
                 author = COALESCE($2, author), \
                 neighbourhood = COALESCE($3, neighbourhood), \
                 rating = COALESCE($4, rating), \
                 quote = COALESCE($5, quote), \
                 is_visible = COALESCE($6, is_visible) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .bind(dto.author.as_deref().map(str::trim))
            .bind(dto.neighbourhood.as_deref().map(str::trim))
            .bind(dto.rating)
            .bind(dto.quote.as_deref().map(str::trim))
            .bind(dto.is_visible)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
