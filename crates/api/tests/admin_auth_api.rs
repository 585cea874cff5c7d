//! HTTP-level tests for the admin gate: login, session check, logout,
//! and the bearer requirement on every admin route.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_auth, post_json, login};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_secret_opens_session(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/admin/login",
        serde_json::json!({ "password": common::TEST_ADMIN_SECRET }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["token"].is_string());
    assert!(json["data"]["expiresAt"].is_number());
    assert_eq!(json["toast"]["message"], "Session active");
    assert_eq!(json["toast"]["kind"], "success");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_secret_is_refused_with_toast(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/admin/login",
        serde_json::json!({ "password": "voltcom2024" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["toast"]["message"], "Code invalide");
    assert_eq!(json["toast"]["kind"], "error");
    assert_eq!(json["toast"]["dismissAfterMs"], 3000);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_routes_require_session(pool: PgPool) {
    let app = common::build_test_app(pool);

    for uri in [
        "/api/v1/admin/settings",
        "/api/v1/admin/projects",
        "/api/v1/admin/categories",
        "/api/v1/admin/reviews",
        "/api/v1/admin/services",
        "/api/v1/admin/submissions",
        "/api/v1/admin/session",
    ] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn forged_token_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/projects", "not.a.token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn session_check_reports_expiry(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login(app.clone()).await;

    let response = get_auth(app, "/api/v1/admin/session", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["expiresAt"].is_number());
    assert!(json["data"].get("token").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_ends_session(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login(app.clone()).await;

    let response = post_auth(app.clone(), "/api/v1/admin/logout", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["toast"]["message"], "Session terminée");

    let response = get_auth(app.clone(), "/api/v1/admin/projects", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // A fresh login still works.
    let token = login(app.clone()).await;
    let response = get_auth(app, "/api/v1/admin/projects", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}
