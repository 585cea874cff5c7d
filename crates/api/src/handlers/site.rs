//! Public page data.
//!
//! Each page bundle reads the settings row and its content concurrently and
//! joins them before responding. Read failures fall back silently (see
//! [`crate::loader`]).

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use voltcom_core::category::{matches_filter, with_sentinel, ALL_CATEGORIES};
use voltcom_core::contact::service_options;
use voltcom_db::models::project::Project;
use voltcom_db::models::review::Review;
use voltcom_db::models::service::Service;
use voltcom_db::repositories::{CategoryRepo, ProjectRepo, ReviewRepo, ServiceRepo, SettingsRepo};

use crate::loader::{list_or_empty, load_settings, settings_or_default, today, SiteView};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesPage {
    pub site: SiteView,
    pub services: Vec<Service>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsPage {
    pub site: SiteView,
    /// Filter buttons; empty when the site hides categories.
    pub categories: Vec<String>,
    pub active_category: String,
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsPage {
    pub site: SiteView,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPage {
    pub site: SiteView,
    pub service_options: Vec<String>,
    pub preselected_service: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectsQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContactQuery {
    pub service: Option<String>,
}

/// GET /api/v1/site
///
/// Settings and banner, read by the navbar and footer on every navigation.
pub async fn get_site(State(state): State<AppState>) -> Json<DataResponse<SiteView>> {
    let settings = load_settings(&state.pool).await;
    Json(DataResponse {
        data: SiteView::new(settings, today()),
    })
}

/// GET /api/v1/pages/home
///
/// Same shape as the services page: the home page previews the catalogue.
pub async fn get_home(State(state): State<AppState>) -> Json<DataResponse<ServicesPage>> {
    Json(DataResponse {
        data: services_page(&state).await,
    })
}

/// GET /api/v1/pages/services
pub async fn get_services(State(state): State<AppState>) -> Json<DataResponse<ServicesPage>> {
    Json(DataResponse {
        data: services_page(&state).await,
    })
}

async fn services_page(state: &AppState) -> ServicesPage {
    let (settings, services) = tokio::join!(
        SettingsRepo::get(&state.pool),
        ServiceRepo::list_visible(&state.pool),
    );
    ServicesPage {
        site: SiteView::new(settings_or_default(settings), today()),
        services: list_or_empty(services, "services"),
    }
}

/// GET /api/v1/pages/projects?category=
///
/// When categories are hidden the filter is ignored and every project is
/// listed.
pub async fn get_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectsQuery>,
) -> Json<DataResponse<ProjectsPage>> {
    let (settings, categories, projects) = tokio::join!(
        SettingsRepo::get(&state.pool),
        CategoryRepo::list_names(&state.pool),
        ProjectRepo::list(&state.pool),
    );
    let settings = settings_or_default(settings);

    let (categories, active_category) = if settings.show_categories {
        let active = query
            .category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| ALL_CATEGORIES.to_string());
        (with_sentinel(list_or_empty(categories, "categories")), active)
    } else {
        (Vec::new(), ALL_CATEGORIES.to_string())
    };

    let projects = list_or_empty(projects, "projects")
        .into_iter()
        .filter(|p| matches_filter(&p.category, Some(active_category.as_str())))
        .collect();

    Json(DataResponse {
        data: ProjectsPage {
            site: SiteView::new(settings, today()),
            categories,
            active_category,
            projects,
        },
    })
}

/// GET /api/v1/pages/reviews
pub async fn get_reviews(State(state): State<AppState>) -> Json<DataResponse<ReviewsPage>> {
    let (settings, reviews) = tokio::join!(
        SettingsRepo::get(&state.pool),
        ReviewRepo::list_visible(&state.pool),
    );
    Json(DataResponse {
        data: ReviewsPage {
            site: SiteView::new(settings_or_default(settings), today()),
            reviews: list_or_empty(reviews, "reviews"),
        },
    })
}

/// GET /api/v1/pages/contact?service=
///
/// `service` comes from a service card's "request a quote" link.
pub async fn get_contact(
    State(state): State<AppState>,
    Query(query): Query<ContactQuery>,
) -> Json<DataResponse<ContactPage>> {
    let (settings, services) = tokio::join!(
        SettingsRepo::get(&state.pool),
        ServiceRepo::list_visible(&state.pool),
    );
    let titles = list_or_empty(services, "services")
        .into_iter()
        .map(|s| s.title)
        .collect();

    Json(DataResponse {
        data: ContactPage {
            site: SiteView::new(settings_or_default(settings), today()),
            service_options: service_options(titles),
            preselected_service: query.service.filter(|s| !s.trim().is_empty()),
        },
    })
}
