//! Admin endpoints for contact submissions (leads).

use axum::extract::{Path, Query, State};
use axum::Json;
use voltcom_core::confirm::{require_confirmation, CONFIRM_DELETE_SUBMISSION};
use voltcom_core::error::CoreError;
use voltcom_core::toast::{MSG_SUBMISSION_DELETED, MSG_SUBMISSION_UPDATED};
use voltcom_core::types::DbId;
use voltcom_db::models::contact_submission::{ContactSubmission, UpdateContactSubmission};
use voltcom_db::repositories::ContactSubmissionRepo;

use super::ConfirmParams;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::{DataResponse, MutationResponse};
use crate::state::AppState;

/// GET /api/v1/admin/submissions
pub async fn list_submissions(
    RequireAdmin(_session): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ContactSubmission>>>> {
    let submissions = ContactSubmissionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: submissions }))
}

/// PUT /api/v1/admin/submissions/{id}
///
/// Mark a submission read or unread.
pub async fn update_submission(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(submission_id): Path<DbId>,
    Json(input): Json<UpdateContactSubmission>,
) -> AppResult<Json<MutationResponse<Vec<ContactSubmission>>>> {
    ContactSubmissionRepo::set_read(&state.pool, submission_id, input.is_read)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactSubmission",
            id: submission_id,
        }))?;

    tracing::info!(submission_id, is_read = input.is_read, session = %session.jti, "Submission updated");

    let submissions = ContactSubmissionRepo::list(&state.pool).await?;
    Ok(Json(MutationResponse::success(
        submissions,
        MSG_SUBMISSION_UPDATED,
    )))
}

/// DELETE /api/v1/admin/submissions/{id}?confirm=true
pub async fn delete_submission(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(submission_id): Path<DbId>,
    Query(params): Query<ConfirmParams>,
) -> AppResult<Json<MutationResponse<Vec<ContactSubmission>>>> {
    require_confirmation(params.confirm, CONFIRM_DELETE_SUBMISSION)?;

    if !ContactSubmissionRepo::delete(&state.pool, submission_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ContactSubmission",
            id: submission_id,
        }));
    }

    tracing::info!(submission_id, session = %session.jti, "Submission deleted");

    let submissions = ContactSubmissionRepo::list(&state.pool).await?;
    Ok(Json(MutationResponse::success(
        submissions,
        MSG_SUBMISSION_DELETED,
    )))
}
