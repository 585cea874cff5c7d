//! Repository for the `settings` singleton.

use sqlx::PgPool;
use voltcom_core::settings::SiteSettings;

use crate::models::settings::SettingsRow;

/// Column list for `settings` queries.
const COLUMNS: &str = "\
    id, phone, email, address, hours, license, promo_active, promo_text, \
    promo_expiry, emergency_active, show_categories, updated_at";

/// The one and only settings row.
const SETTINGS_ID: i16 = 1;

pub struct SettingsRepo;

impl SettingsRepo {
    /// Read the settings row. `None` when it has never been written.
    pub async fn get(pool: &PgPool) -> Result<Option<SiteSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings WHERE id = $1");
        let row = sqlx::query_as::<_, SettingsRow>(&query)
            .bind(SETTINGS_ID)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(SiteSettings::from))
    }

    /// Write every settings field, creating the row if missing.
    pub async fn upsert(pool: &PgPool, settings: &SiteSettings) -> Result<SiteSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO settings \
                 (id, phone, email, address, hours, license, promo_active, promo_text, \
                  promo_expiry, emergency_active, show_categories) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             ON CONFLICT (id) DO UPDATE SET \
                 phone = EXCLUDED.phone, \
                 email = EXCLUDED.email, \
                 address = EXCLUDED.address, \
                 hours = EXCLUDED.hours, \
                 license = EXCLUDED.license, \
                 promo_active = EXCLUDED.promo_active, \
                 promo_text = EXCLUDED.promo_text, \
                 promo_expiry = EXCLUDED.promo_expiry, \
                 emergency_active = EXCLUDED.emergency_active, \
                 show_categories = EXCLUDED.show_categories, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, SettingsRow>(&query)
            .bind(SETTINGS_ID)
            .bind(&settings.phone)
            .bind(&settings.email)
            .bind(&settings.address)
            .bind(&settings.hours)
            .bind(&settings.license)
            .bind(settings.promo_active)
            .bind(&settings.promo_text)
            .bind(settings.promo_expiry)
            .bind(settings.emergency_active)
            .bind(settings.show_categories)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }
}
