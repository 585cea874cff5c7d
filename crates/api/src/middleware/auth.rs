//! Session-token extractor for admin handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use voltcom_core::error::CoreError;

use crate::auth::session::{validate_session, SessionClaims, ADMIN_SUBJECT};
use crate::error::AppError;
use crate::state::AppState;

/// A live admin session, extracted from the `Authorization: Bearer` header.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(session): RequireAdmin) -> AppResult<Json<()>> {
///     tracing::info!(session = %session.jti, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub SessionClaims);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_session(token, &state.config.session).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
        })?;

        if claims.sub != ADMIN_SUBJECT || state.revoked_sessions.is_revoked(&claims.jti).await {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Session has ended".into(),
            )));
        }

        Ok(RequireAdmin(claims))
    }
}
