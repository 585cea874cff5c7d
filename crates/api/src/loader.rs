//! Public settings/content loading with silent fallbacks.
//!
//! Public pages never fail because the store is unhappy: a missing or
//! unreadable settings row becomes [`SiteSettings::default`], and a failed
//! content query becomes an empty list. Failures are only logged.

use chrono::NaiveDate;
use serde::Serialize;
use voltcom_core::settings::{BannerState, SiteSettings};
use voltcom_db::repositories::SettingsRepo;
use voltcom_db::DbPool;

/// Settings plus the banner resolved from them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteView {
    pub settings: SiteSettings,
    pub banner: BannerState,
}

impl SiteView {
    pub fn new(settings: SiteSettings, today: NaiveDate) -> Self {
        let banner = BannerState::resolve(&settings, today);
        Self { settings, banner }
    }
}

/// The calendar date promo expiry is judged against.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Read the settings row, falling back to defaults on any problem.
pub async fn load_settings(pool: &DbPool) -> SiteSettings {
    settings_or_default(SettingsRepo::get(pool).await)
}

pub fn settings_or_default(result: Result<Option<SiteSettings>, sqlx::Error>) -> SiteSettings {
    match result {
        Ok(Some(settings)) => settings,
        Ok(None) => {
            tracing::warn!("Settings row missing, serving defaults");
            SiteSettings::default()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load settings, serving defaults");
            SiteSettings::default()
        }
    }
}

/// Unwrap a content listing, or log and return an empty list.
pub fn list_or_empty<T>(result: Result<Vec<T>, sqlx::Error>, what: &'static str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!(error = %e, content = what, "Failed to load content, serving empty list");
        Vec::new()
    })
}
