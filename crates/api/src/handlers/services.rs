//! Admin service catalogue endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;
use voltcom_core::confirm::{require_confirmation, CONFIRM_DELETE_SERVICE};
use voltcom_core::error::CoreError;
use voltcom_core::toast::{MSG_SERVICE_DELETED, MSG_SERVICE_SAVED};
use voltcom_core::types::DbId;
use voltcom_db::models::service::{CreateService, Service, UpdateService};
use voltcom_db::repositories::ServiceRepo;

use super::ConfirmParams;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::{DataResponse, MutationResponse};
use crate::state::AppState;

/// GET /api/v1/admin/services
///
/// All services, hidden ones included, in display order.
pub async fn list_services(
    RequireAdmin(_session): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Service>>>> {
    let services = ServiceRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: services }))
}

/// POST /api/v1/admin/services
pub async fn create_service(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateService>,
) -> AppResult<(StatusCode, Json<MutationResponse<Vec<Service>>>)> {
    input.validate().map_err(CoreError::from)?;

    let service = ServiceRepo::create(&state.pool, &input).await?;
    tracing::info!(
        service_id = service.id,
        icon = %service.icon,
        display_order = service.display_order,
        session = %session.jti,
        "Service created",
    );

    let services = ServiceRepo::list(&state.pool).await?;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::success(services, MSG_SERVICE_SAVED)),
    ))
}

/// PUT /api/v1/admin/services/{id}
pub async fn update_service(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(service_id): Path<DbId>,
    Json(input): Json<UpdateService>,
) -> AppResult<Json<MutationResponse<Vec<Service>>>> {
    input.validate().map_err(CoreError::from)?;

    ServiceRepo::update(&state.pool, service_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id: service_id,
        }))?;

    tracing::info!(service_id, session = %session.jti, "Service updated");

    let services = ServiceRepo::list(&state.pool).await?;
    Ok(Json(MutationResponse::success(services, MSG_SERVICE_SAVED)))
}

/// DELETE /api/v1/admin/services/{id}?confirm=true
pub async fn delete_service(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(service_id): Path<DbId>,
    Query(params): Query<ConfirmParams>,
) -> AppResult<Json<MutationResponse<Vec<Service>>>> {
    require_confirmation(params.confirm, CONFIRM_DELETE_SERVICE)?;

    if !ServiceRepo::delete(&state.pool, service_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id: service_id,
        }));
    }

    tracing::info!(service_id, session = %session.jti, "Service deleted");

    let services = ServiceRepo::list(&state.pool).await?;
    Ok(Json(MutationResponse::success(services, MSG_SERVICE_DELETED)))
}
