//! Admin console login, logout and session check.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use voltcom_core::error::CoreError;
use voltcom_core::toast::{MSG_INVALID_CODE, MSG_LOGGED_OUT, MSG_SESSION_ACTIVE};

use crate::auth::session::{issue_session, secret_matches};
use crate::error::{AppError, AppResult, WithToast};
use crate::middleware::auth::RequireAdmin;
use crate::response::{DataResponse, MutationResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    /// Absent on the session check; the client already holds it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub expires_at: i64,
}

/// POST /api/v1/admin/login
///
/// Unlocks the console when the password equals the configured secret.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<MutationResponse<SessionInfo>>> {
    if !secret_matches(&input.password, &state.config.session.admin_secret) {
        tracing::warn!("Admin login rejected");
        return Err(CoreError::Unauthorized("Invalid admin secret".into())).with_toast(MSG_INVALID_CODE);
    }

    let (token, claims) = issue_session(&state.config.session)
        .map_err(|e| AppError::InternalError(format!("Failed to issue session: {e}")))?;

    tracing::info!(session = %claims.jti, "Admin session started");

    Ok(Json(MutationResponse::success(
        SessionInfo {
            token: Some(token),
            expires_at: claims.exp,
        },
        MSG_SESSION_ACTIVE,
    )))
}

/// GET /api/v1/admin/session
///
/// Lets a reloaded tab check whether its stored session is still live.
pub async fn session(RequireAdmin(claims): RequireAdmin) -> Json<DataResponse<SessionInfo>> {
    Json(DataResponse {
        data: SessionInfo {
            token: None,
            expires_at: claims.exp,
        },
    })
}

/// POST /api/v1/admin/logout
pub async fn logout(
    RequireAdmin(claims): RequireAdmin,
    State(state): State<AppState>,
) -> Json<MutationResponse<()>> {
    state.revoked_sessions.revoke(&claims.jti, claims.exp).await;
    tracing::info!(session = %claims.jti, "Admin session ended");
    Json(MutationResponse::success((), MSG_LOGGED_OUT))
}
