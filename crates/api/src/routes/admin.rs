//! Admin console routes mounted at `/admin`.
//!
//! Everything except `/login` requires a live session token.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{
    admin_auth, categories, projects, reviews, services, settings, submissions,
};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin_auth::login))
        .route("/logout", post(admin_auth::logout))
        .route("/session", get(admin_auth::session))
        .route(
            "/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route("/projects/image", post(projects::upload_image))
        .route(
            "/projects/{id}",
            put(projects::update_project).delete(projects::delete_project),
        )
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route("/categories/{name}", delete(categories::delete_category))
        .route(
            "/reviews",
            get(reviews::list_reviews).post(reviews::create_review),
        )
        .route(
            "/reviews/{id}",
            put(reviews::update_review).delete(reviews::delete_review),
        )
        .route(
            "/services",
            get(services::list_services).post(services::create_service),
        )
        .route(
            "/services/{id}",
            put(services::update_service).delete(services::delete_service),
        )
        .route("/submissions", get(submissions::list_submissions))
        .route(
            "/submissions/{id}",
            put(submissions::update_submission).delete(submissions::delete_submission),
        )
}
