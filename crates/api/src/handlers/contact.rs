//! Public contact form endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use voltcom_core::contact::{ContactFields, ContactForm, ContactFormState};
use voltcom_core::types::DbId;
use voltcom_db::repositories::ContactSubmissionRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Where the form ended up after a submit attempt.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactOutcome {
    pub state: ContactFormState,
    pub submission_id: Option<DbId>,
    pub error: Option<String>,
    /// Cleared on success, echoed back unchanged on failure.
    pub fields: ContactFields,
}

/// POST /api/v1/contact
///
/// Inserts exactly one submission. Invalid fields are refused with 400
/// before any write; a store failure answers 503 with the entered fields
/// intact so the visitor can retry.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(input): Json<ContactFields>,
) -> AppResult<impl IntoResponse> {
    let mut form = ContactForm::new(None);
    if let Some(fields) = form.fields_mut() {
        *fields = input;
    }

    let payload = form.begin_submit()?;
    let result = ContactSubmissionRepo::create(&state.pool, &payload).await;
    form.finish_submit(result.as_ref().map(|_| ()));

    let (status, submission_id) = match &result {
        Ok(submission) => {
            tracing::info!(
                submission_id = submission.id,
                service = %submission.service,
                "Contact submission received",
            );
            (StatusCode::CREATED, Some(submission.id))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to store contact submission");
            (StatusCode::SERVICE_UNAVAILABLE, None)
        }
    };

    let outcome = ContactOutcome {
        state: form.state(),
        submission_id,
        error: form.error().map(str::to_string),
        fields: form.fields().clone(),
    };

    Ok((status, Json(DataResponse { data: outcome })))
}
