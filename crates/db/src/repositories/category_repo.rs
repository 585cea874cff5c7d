//! Repository for the `categories` table.

use sqlx::PgPool;

use crate::models::category::Category;

const COLUMNS: &str = "id, name, created_at";

pub struct CategoryRepo;

impl CategoryRepo {
    /// All stored categories in creation order. The sentinel is never stored.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Stored category names in creation order.
    pub async fn list_names(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT name FROM categories ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Insert an already-normalized name.
    ///
    /// A concurrent duplicate surfaces as a `uq_categories_name` violation.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Category, sqlx::Error> {
        let query = format!("INSERT INTO categories (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Delete by name. Returns `true` if a row was removed.
    pub async fn delete_by_name(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE name = $1")
            .bind(name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
