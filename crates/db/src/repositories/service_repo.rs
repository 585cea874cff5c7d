//! Repository for the `services` table.

use sqlx::PgPool;
use voltcom_core::types::DbId;

use crate::models::service::{CreateService, Service, ServiceRow, UpdateService};

const COLUMNS: &str = "id, title, description, icon, display_order, is_visible, created_at";

pub struct ServiceRepo;

impl ServiceRepo {
    /// Every service in display order (admin listing).
    pub async fn list(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services ORDER BY display_order, id");
        let rows = sqlx::query_as::<_, ServiceRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(convert_rows(rows))
    }

    /// Visible services in display order (public listing).
    pub async fn list_visible(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM services WHERE is_visible = TRUE ORDER BY display_order, id"
        );
        let rows = sqlx::query_as::<_, ServiceRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(convert_rows(rows))
    }

    /// Append a service. Without an explicit order it goes last.
    pub async fn create(pool: &PgPool, dto: &CreateService) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services (title, description, icon, display_order, is_visible) \
             VALUES ($1, $2, $3, \
                     COALESCE($4, (SELECT COALESCE(MAX(display_order), 0) + 1 FROM services)), \
                     COALESCE($5, TRUE)) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ServiceRow>(&query)
            .bind(dto.title.trim())
            .bind(dto.description.trim())
            .bind(dto.icon.as_str())
            .bind(dto.display_order)
            .bind(dto.is_visible)
            .fetch_one(pool)
            .await?;
        decode(row)
    }

    /// Partially update a service.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 icon = COALESCE($4, icon), \
                 display_order = COALESCE($5, display_order), \
                 is_visible = COALESCE($6, is_visible) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ServiceRow>(&query)
            .bind(id)
            .bind(dto.title.as_deref().map(str::trim))
            .bind(dto.description.as_deref().map(str::trim))
            .bind(dto.icon.map(|icon| icon.as_str()))
            .bind(dto.display_order)
            .bind(dto.is_visible)
            .fetch_optional(pool)
            .await?;
        row.map(decode).transpose()
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn decode(row: ServiceRow) -> Result<Service, sqlx::Error> {
    Service::try_from(row).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

/// Drop rows whose icon no longer matches a known name instead of failing
/// the whole listing.
fn convert_rows(rows: Vec<ServiceRow>) -> Vec<Service> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.id;
            match Service::try_from(row) {
                Ok(service) => Some(service),
                Err(e) => {
                    tracing::warn!(service_id = id, error = %e, "Skipping malformed service row");
                    None
                }
            }
        })
        .collect()
}
