//! Admin category endpoints.
//!
//! Listings always include the `TOUS` sentinel first. The sentinel and any
//! category still referenced by a project are refused on delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use voltcom_core::category::{ensure_deletable, normalize_new_name, with_sentinel, ALL_CATEGORIES};
use voltcom_core::error::CoreError;
use voltcom_core::toast::{
    MSG_CATEGORY_ADDED, MSG_CATEGORY_DELETED, MSG_CATEGORY_FORBIDDEN, MSG_CATEGORY_IN_USE,
    MSG_CATEGORY_INVALID,
};
use voltcom_db::models::category::CreateCategory;
use voltcom_db::repositories::{CategoryRepo, ProjectRepo};

use crate::error::{AppError, AppResult, WithToast};
use crate::middleware::auth::RequireAdmin;
use crate::response::{DataResponse, MutationResponse};
use crate::state::AppState;

async fn listing(state: &AppState) -> AppResult<Vec<String>> {
    Ok(with_sentinel(CategoryRepo::list_names(&state.pool).await?))
}

/// GET /api/v1/admin/categories
pub async fn list_categories(
    RequireAdmin(_session): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<String>>>> {
    Ok(Json(DataResponse {
        data: listing(&state).await?,
    }))
}

/// POST /api/v1/admin/categories
pub async fn create_category(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<MutationResponse<Vec<String>>>)> {
    let existing = CategoryRepo::list_names(&state.pool).await?;
    let name = normalize_new_name(&input.name, &existing).with_toast(MSG_CATEGORY_INVALID)?;

    let category = CategoryRepo::create(&state.pool, &name)
        .await
        .map_err(|e| duplicate_as_refusal(e, &name))?;
    tracing::info!(category_id = category.id, name = %category.name, session = %session.jti, "Category created");

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::success(listing(&state).await?, MSG_CATEGORY_ADDED)),
    ))
}

/// A concurrent insert of the same name trips `uq_categories_name` after the
/// pre-check passed; report it like any other taken name.
fn duplicate_as_refusal(err: sqlx::Error, name: &str) -> AppError {
    match err {
        sqlx::Error::Database(db_err) if db_err.constraint() == Some("uq_categories_name") => {
            AppError::Refused {
                source: CoreError::Conflict(format!("Category '{name}' already exists")),
                toast: MSG_CATEGORY_INVALID,
            }
        }
        other => AppError::Database(other),
    }
}

/// DELETE /api/v1/admin/categories/{name}
pub async fn delete_category(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<MutationResponse<Vec<String>>>> {
    let in_use = if name == ALL_CATEGORIES {
        0
    } else {
        ProjectRepo::count_by_category(&state.pool, &name).await?
    };

    ensure_deletable(&name, in_use).map_err(|source| {
        let toast = match source {
            CoreError::Conflict(_) => MSG_CATEGORY_IN_USE,
            _ => MSG_CATEGORY_FORBIDDEN,
        };
        AppError::Refused { source, toast }
    })?;

    if !CategoryRepo::delete_by_name(&state.pool, &name).await? {
        return Err(AppError::Core(CoreError::NotFoundByKey {
            entity: "Category",
            key: name,
        }));
    }

    tracing::info!(name = %name, session = %session.jti, "Category deleted");

    Ok(Json(MutationResponse::success(
        listing(&state).await?,
        MSG_CATEGORY_DELETED,
    )))
}
