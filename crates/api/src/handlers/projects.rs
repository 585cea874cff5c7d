//! Admin project endpoints.
//!
//! Every mutation answers with the re-read project list. Images are inlined
//! into the row as `data:` URIs; there is no separate asset storage.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use voltcom_core::category::resolve_project_category;
use voltcom_core::confirm::{require_confirmation, CONFIRM_DELETE_PROJECT};
use voltcom_core::error::CoreError;
use voltcom_core::project::encode_image_data_uri;
use voltcom_core::toast::{
    MSG_IMAGE_READY, MSG_PROJECT_DELETED, MSG_PROJECT_PUBLISHED, MSG_PROJECT_UPDATED,
};
use voltcom_core::types::DbId;
use voltcom_db::models::project::{CreateProject, Project, ProjectFields, UpdateProject};
use voltcom_db::repositories::{CategoryRepo, ProjectRepo};

use super::ConfirmParams;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::{DataResponse, MutationResponse};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub image_url: String,
    pub bytes: usize,
}

/// GET /api/v1/admin/projects
pub async fn list_projects(
    RequireAdmin(_session): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// POST /api/v1/admin/projects
pub async fn create_project(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<MutationResponse<Vec<Project>>>)> {
    let mut fields = ProjectFields::try_from(input)?;
    let stored = CategoryRepo::list_names(&state.pool).await?;
    fields.category = resolve_project_category(&fields.category, &stored)?;

    let project = ProjectRepo::create(&state.pool, &fields).await?;

    tracing::info!(
        project_id = project.id,
        category = %project.category,
        is_placeholder = project.is_placeholder,
        session = %session.jti,
        "Project created",
    );

    let projects = ProjectRepo::list(&state.pool).await?;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::success(projects, MSG_PROJECT_PUBLISHED)),
    ))
}

/// PUT /api/v1/admin/projects/{id}
pub async fn update_project(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<MutationResponse<Vec<Project>>>> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        })
    };

    let existing = ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or_else(not_found)?;
    let category_changed = input.category.is_some();
    let mut fields = input.apply_to(&existing)?;
    if category_changed {
        let stored = CategoryRepo::list_names(&state.pool).await?;
        fields.category = resolve_project_category(&fields.category, &stored)?;
    }

    ProjectRepo::update(&state.pool, project_id, &fields)
        .await?
        .ok_or_else(not_found)?;

    tracing::info!(project_id, session = %session.jti, "Project updated");

    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(MutationResponse::success(projects, MSG_PROJECT_UPDATED)))
}

/// DELETE /api/v1/admin/projects/{id}?confirm=true
pub async fn delete_project(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Query(params): Query<ConfirmParams>,
) -> AppResult<Json<MutationResponse<Vec<Project>>>> {
    require_confirmation(params.confirm, CONFIRM_DELETE_PROJECT)?;

    if !ProjectRepo::delete(&state.pool, project_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }));
    }

    tracing::info!(project_id, session = %session.jti, "Project deleted");

    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(MutationResponse::success(projects, MSG_PROJECT_DELETED)))
}

/// POST /api/v1/admin/projects/image
///
/// Read the first file field of a multipart upload and return it as a
/// `data:` URI ready to be used as a project's `imageUrl`.
pub async fn upload_image(
    RequireAdmin(_session): RequireAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<MutationResponse<UploadedImage>>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.file_name().is_none() {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let image_url = encode_image_data_uri(&data, state.config.max_image_bytes)?;
        tracing::debug!(bytes = data.len(), "Project image inlined");

        return Ok(Json(MutationResponse::success(
            UploadedImage {
                image_url,
                bytes: data.len(),
            },
            MSG_IMAGE_READY,
        )));
    }

    Err(AppError::BadRequest(
        "No file received in multipart upload".to_string(),
    ))
}
