pub mod admin;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /site                                   settings + banner
/// /pages/home                             home page bundle
/// /pages/services                         services page bundle
/// /pages/projects?category=               projects page bundle
/// /pages/reviews                          reviews page bundle
/// /pages/contact?service=                 contact page bundle
/// /contact                                submit the contact form (POST)
///
/// /admin/login                            shared-secret login (POST)
/// /admin/logout                           end session (POST)
/// /admin/session                          check session (GET)
/// /admin/settings                         get, replace
/// /admin/projects                         list, create
/// /admin/projects/image                   multipart image -> data URI (POST)
/// /admin/projects/{id}                    update, delete
/// /admin/categories                       list, create
/// /admin/categories/{name}                delete
/// /admin/reviews                          list, create
/// /admin/reviews/{id}                     update, delete
/// /admin/services                         list, create
/// /admin/services/{id}                    update, delete
/// /admin/submissions                      list
/// /admin/submissions/{id}                 mark read, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(public::router())
        .nest("/admin", admin::router())
}
