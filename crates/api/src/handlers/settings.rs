//! Admin settings endpoints (contact info and banner controls).

use axum::extract::State;
use axum::Json;
use voltcom_core::settings::SiteSettings;
use voltcom_core::toast::MSG_SETTINGS_SAVED;
use voltcom_db::repositories::SettingsRepo;

use crate::error::AppResult;
use crate::loader::{load_settings, today, SiteView};
use crate::middleware::auth::RequireAdmin;
use crate::response::{DataResponse, MutationResponse};
use crate::state::AppState;

/// GET /api/v1/admin/settings
///
/// Current settings with a preview of the banner they produce.
pub async fn get_settings(
    RequireAdmin(_session): RequireAdmin,
    State(state): State<AppState>,
) -> Json<DataResponse<SiteView>> {
    let settings = load_settings(&state.pool).await;
    Json(DataResponse {
        data: SiteView::new(settings, today()),
    })
}

/// PUT /api/v1/admin/settings
///
/// Replace the whole settings row and answer with what was stored.
pub async fn update_settings(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<SiteSettings>,
) -> AppResult<Json<MutationResponse<SiteView>>> {
    input.validate()?;
    let stored = SettingsRepo::upsert(&state.pool, &input).await?;

    tracing::info!(
        session = %session.jti,
        promo_active = stored.promo_active,
        emergency_active = stored.emergency_active,
        show_categories = stored.show_categories,
        "Site settings updated",
    );

    Ok(Json(MutationResponse::success(
        SiteView::new(stored, today()),
        MSG_SETTINGS_SAVED,
    )))
}
