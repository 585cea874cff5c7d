//! Public site routes. No authentication.
//!
//! ```text
//! GET  /site              -> get_site
//! GET  /pages/home        -> get_home
//! GET  /pages/services    -> get_services
//! GET  /pages/projects    -> get_projects
//! GET  /pages/reviews     -> get_reviews
//! GET  /pages/contact     -> get_contact
//! POST /contact           -> submit_contact
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{contact, site};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/site", get(site::get_site))
        .route("/pages/home", get(site::get_home))
        .route("/pages/services", get(site::get_services))
        .route("/pages/projects", get(site::get_projects))
        .route("/pages/reviews", get(site::get_reviews))
        .route("/pages/contact", get(site::get_contact))
        .route("/contact", post(contact::submit_contact))
}
