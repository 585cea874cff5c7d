//! Site settings singleton, promo expiry and banner resolution.
//!
//! Every public page reads the settings row; the admin console is the only
//! writer. Banner precedence and promo expiry are decided here, once, so no
//! consumer re-implements them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The singleton configuration record shown across the public site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
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
}

impl Default for SiteSettings {
    /// Hardcoded fallback used whenever the settings row cannot be read.
    fn default() -> Self {
        Self {
            phone: "(514) 507-6847".to_string(),
            email: "info@electricitevoltcom.com".to_string(),
            address: "6882 24e Avenue, Montréal, QC H1T 3M9".to_string(),
            hours: "Lundi–Vendredi, 7h00–17h00".to_string(),
            license: "R.B.Q. 5618-6505 | Membre CMEQ".to_string(),
            promo_active: false,
            promo_text: "Rabais 15% sur les bornes VE ce mois-ci!".to_string(),
            promo_expiry: None,
            emergency_active: false,
            show_categories: true,
        }
    }
}

impl SiteSettings {
    /// Required contact fields must be non-blank before the row is written.
    pub fn validate(&self) -> Result<(), CoreError> {
        let required = [
            ("phone", &self.phone),
            ("email", &self.email),
            ("address", &self.address),
            ("hours", &self.hours),
            ("license", &self.license),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::Validation(format!("{field} must not be empty")));
            }
        }
        if self.promo_active && self.promo_text.trim().is_empty() {
            return Err(CoreError::Validation(
                "promoText must not be empty while the promo is active".into(),
            ));
        }
        Ok(())
    }
}

/// Whether the promo has passed its expiry date.
///
/// The promo ends when its expiry date begins; the day before is the last
/// day it is shown.
pub fn promo_expired(settings: &SiteSettings, today: NaiveDate) -> bool {
    settings.promo_expiry.is_some_and(|expiry| today >= expiry)
}

/// The single announcement strip eligible for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BannerState {
    None,
    Emergency { phone: String },
    Promo { text: String },
}

impl BannerState {
    /// Emergency wins over promo; an expired promo is never shown.
    pub fn resolve(settings: &SiteSettings, today: NaiveDate) -> Self {
        if settings.emergency_active {
            return BannerState::Emergency {
                phone: settings.phone.clone(),
            };
        }
        if settings.promo_active && !promo_expired(settings, today) {
            return BannerState::Promo {
                text: settings.promo_text.clone(),
            };
        }
        BannerState::None
    }
}
