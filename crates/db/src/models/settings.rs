//! The `settings` singleton row.

use chrono::NaiveDate;
use sqlx::FromRow;
use voltcom_core::settings::SiteSettings;
use voltcom_core::types::Timestamp;

/// A raw row from the `settings` table (always `id = 1`).
#[derive(Debug, Clone, FromRow)]
pub struct SettingsRow {
    pub id: i16,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub hours: String,
    pub license: String,
    pub promo_active: bool,
    pub promo_text: String,
    pub promo_expiry: Option<NaiveDate>,
    pub emergency_active: bool,
    pub show_categories: bool,
    pub updated_at: Timestamp,
}

impl From<SettingsRow> for SiteSettings {
    fn from(row: SettingsRow) -> Self {
        SiteSettings {
            phone: row.phone,
            email: row.email,
            address: row.address,
            hours: row.hours,
            license: row.license,
            promo_active: row.promo_active,
            promo_text: row.promo_text,
            promo_expiry: row.promo_expiry,
            emergency_active: row.emergency_active,
            show_categories: row.show_categories,
        }
    }
}
