//! Admin review endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;
use voltcom_core::confirm::{require_confirmation, CONFIRM_DELETE_REVIEW};
use voltcom_core::error::CoreError;
use voltcom_core::toast::{MSG_REVIEW_DELETED, MSG_REVIEW_SAVED};
use voltcom_core::types::DbId;
use voltcom_db::models::review::{CreateReview, Review, UpdateReview};
use voltcom_db::repositories::ReviewRepo;

use super::ConfirmParams;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::{DataResponse, MutationResponse};
use crate::state::AppState;

/// GET /api/v1/admin/reviews
///
/// Includes hidden reviews.
pub async fn list_reviews(
    RequireAdmin(_session): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Review>>>> {
    let reviews = ReviewRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: reviews }))
}

/// POST /api/v1/admin/reviews
pub async fn create_review(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateReview>,
) -> AppResult<(StatusCode, Json<MutationResponse<Vec<Review>>>)> {
    input.validate().map_err(CoreError::from)?;

    let review = ReviewRepo::create(&state.pool, &input).await?;
    tracing::info!(review_id = review.id, rating = review.rating, session = %session.jti, "Review created");

    let reviews = ReviewRepo::list(&state.pool).await?;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::success(reviews, MSG_REVIEW_SAVED)),
    ))
}

/// PUT /api/v1/admin/reviews/{id}
///
/// Also used to hide or show a review via `isVisible`.
pub async fn update_review(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(review_id): Path<DbId>,
    Json(input): Json<UpdateReview>,
) -> AppResult<Json<MutationResponse<Vec<Review>>>> {
    input.validate().map_err(CoreError::from)?;

    ReviewRepo::update(&state.pool, review_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id: review_id,
        }))?;

    tracing::info!(review_id, session = %session.jti, "Review updated");

    let reviews = ReviewRepo::list(&state.pool).await?;
    Ok(Json(MutationResponse::success(reviews, MSG_REVIEW_SAVED)))
}

/// DELETE /api/v1/admin/reviews/{id}?confirm=true
pub async fn delete_review(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(review_id): Path<DbId>,
    Query(params): Query<ConfirmParams>,
) -> AppResult<Json<MutationResponse<Vec<Review>>>> {
    require_confirmation(params.confirm, CONFIRM_DELETE_REVIEW)?;

    if !ReviewRepo::delete(&state.pool, review_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id: review_id,
        }));
    }

    tracing::info!(review_id, session = %session.jti, "Review deleted");

    let reviews = ReviewRepo::list(&state.pool).await?;
    Ok(Json(MutationResponse::success(reviews, MSG_REVIEW_DELETED)))
}
