//! HTTP-level tests for the admin console CRUD endpoints.
//!
//! Every mutation answers with the re-read list and a toast.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get_auth, login, post_json, post_json_auth, post_multipart_auth,
    put_json_auth,
};
use sqlx::PgPool;

fn find_by_title<'a>(list: &'a serde_json::Value, title: &str) -> &'a serde_json::Value {
    list.as_array()
        .unwrap()
        .iter()
        .find(|item| item["title"] == title)
        .unwrap_or_else(|| panic!("{title} should be listed"))
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn settings_read_after_write(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login(app.clone()).await;

    let mut settings = body_json(get_auth(app.clone(), "/api/v1/admin/settings", &token).await)
        .await["data"]["settings"]
        .clone();
    settings["phone"] = serde_json::json!("(438) 555-0199");
    settings["showCategories"] = serde_json::json!(false);

    let response = put_json_auth(app.clone(), "/api/v1/admin/settings", &token, settings).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["toast"]["message"], "Paramètres enregistrés");

    let json = body_json(get_auth(app, "/api/v1/admin/settings", &token).await).await;
    assert_eq!(json["data"]["settings"]["phone"], "(438) 555-0199");
    assert_eq!(json["data"]["settings"]["showCategories"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn settings_refuse_blank_phone(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login(app.clone()).await;

    let mut settings = body_json(get_auth(app.clone(), "/api/v1/admin/settings", &token).await)
        .await["data"]["settings"]
        .clone();
    settings["phone"] = serde_json::json!("  ");

    let response = put_json_auth(app, "/api/v1/admin/settings", &token, settings).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_without_image_is_placeholder(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login(app.clone()).await;

    let response = post_json_auth(
        app,
        "/api/v1/admin/projects",
        &token,
        serde_json::json!({
            "title": "Panneau 200A Outremont",
            "neighbourhood": "Outremont",
            "category": "RÉSIDENTIEL",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["toast"]["message"], "Projet publié");
    assert_eq!(json["data"].as_array().unwrap().len(), 7);

    let created = find_by_title(&json["data"], "Panneau 200A Outremont");
    assert_eq!(created["isPlaceholder"], true);
    assert!(created["imageUrl"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_project_image_clears_placeholder(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = login(app.clone()).await;
    let (id,): (i64,) = sqlx::query_as("SELECT id FROM projects WHERE title = 'Borne Tesla Niv 2'")
        .fetch_one(&pool)
        .await
        .unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/projects/{id}"),
        &token,
        serde_json::json!({ "imageUrl": "https://cdn.example.com/borne.jpg" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["toast"]["message"], "Mise à jour OK");
    let updated = find_by_title(&json["data"], "Borne Tesla Niv 2");
    assert_eq!(updated["isPlaceholder"], false);
    assert_eq!(updated["neighbourhood"], "Plateau");

    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/projects/{id}"),
        &token,
        serde_json::json!({ "imageUrl": "" }),
    )
    .await;
    let json = body_json(response).await;
    let updated = find_by_title(&json["data"], "Borne Tesla Niv 2");
    assert_eq!(updated["isPlaceholder"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login(app.clone()).await;

    let response = put_json_auth(
        app,
        "/api/v1/admin/projects/999999",
        &token,
        serde_json::json!({ "title": "Fantôme" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_project_needs_confirmation(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = login(app.clone()).await;
    let (id,): (i64,) = sqlx::query_as("SELECT id FROM projects WHERE title = 'Rénovation Cuisine'")
        .fetch_one(&pool)
        .await
        .unwrap();

    let response = delete_auth(app.clone(), &format!("/api/v1/admin/projects/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = delete_auth(
        app,
        &format!("/api/v1/admin/projects/{id}?confirm=true"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["toast"]["message"], "Projet supprimé avec succès");
    assert_eq!(json["data"].as_array().unwrap().len(), 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn image_upload_returns_data_uri(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login(app.clone()).await;

    let boundary = "voltcom-boundary";
    let png: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"chantier.png\"\r\n\
             Content-Type: image/png\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(png);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let response =
        post_multipart_auth(app, "/api/v1/admin/projects/image", &token, boundary, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["imageUrl"]
        .as_str()
        .unwrap()
        .starts_with("data:image/png;base64,"));
    assert_eq!(json["data"]["bytes"], png.len());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_category_must_be_a_stored_category(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = login(app.clone()).await;

    post_json_auth(
        app.clone(),
        "/api/v1/admin/categories",
        &token,
        serde_json::json!({ "name": "SOLAIRE" }),
    )
    .await;

    let project = |category: &str| {
        serde_json::json!({
            "title": "Panneaux Verdun",
            "neighbourhood": "Verdun",
            "category": category,
        })
    };

    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/projects",
        &token,
        project(" solaire "),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(find_by_title(&json["data"], "Panneaux Verdun")["category"], "SOLAIRE");

    for category in ["INEXISTANTE", "TOUS", "  "] {
        let response = post_json_auth(
            app.clone(),
            "/api/v1/admin/projects",
            &token,
            project(category),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{category:?}");
    }

    let (id,): (i64,) =
        sqlx::query_as("SELECT id FROM projects WHERE title = 'Nouveau Éclairage LED'")
            .fetch_one(&pool)
            .await
            .unwrap();
    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/projects/{id}"),
        &token,
        serde_json::json!({ "category": "INEXISTANTE" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The lower-cased filing still counts as a reference.
    let response = delete_auth(app, "/api/v1/admin/categories/SOLAIRE", &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_duplicate_category_gets_name_toast(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login(app.clone()).await;
    let body = serde_json::json!({ "name": "DOMOTIQUE" });

    let (first, second) = tokio::join!(
        post_json_auth(app.clone(), "/api/v1/admin/categories", &token, body.clone()),
        post_json_auth(app.clone(), "/api/v1/admin/categories", &token, body.clone()),
    );

    let mut statuses = [first.status().as_u16(), second.status().as_u16()];
    statuses.sort_unstable();
    assert_eq!(statuses, [201, 409]);

    let refused = if first.status() == StatusCode::CONFLICT { first } else { second };
    let json = body_json(refused).await;
    assert_eq!(json["toast"]["message"], "Nom invalide ou existant");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_category_normalizes_name(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login(app.clone()).await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/categories",
        &token,
        serde_json::json!({ "name": "  solaire " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["toast"]["message"], "Catégorie ajoutée");
    let names = json["data"].as_array().unwrap();
    assert_eq!(names[0], "TOUS");
    assert!(names.iter().any(|n| n == "SOLAIRE"));

    let response = post_json_auth(
        app,
        "/api/v1/admin/categories",
        &token,
        serde_json::json!({ "name": "Solaire" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["toast"]["message"], "Nom invalide ou existant");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_in_use_cannot_be_deleted(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login(app.clone()).await;

    let response = delete_auth(
        app,
        "/api/v1/admin/categories/R%C3%89SIDENTIEL",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["toast"]["message"], "Utilisée par des projets");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn sentinel_category_cannot_be_deleted(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login(app.clone()).await;

    let response = delete_auth(app, "/api/v1/admin/categories/TOUS", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["toast"]["message"], "Action interdite");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unused_category_is_deleted(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login(app.clone()).await;

    post_json_auth(
        app.clone(),
        "/api/v1/admin/categories",
        &token,
        serde_json::json!({ "name": "SOLAIRE" }),
    )
    .await;

    let response = delete_auth(app.clone(), "/api/v1/admin/categories/SOLAIRE", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["toast"]["message"], "Catégorie supprimée");
    assert!(json["data"].as_array().unwrap().iter().all(|n| n != "SOLAIRE"));

    let response = delete_auth(app, "/api/v1/admin/categories/SOLAIRE", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn review_lifecycle(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login(app.clone()).await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/reviews",
        &token,
        serde_json::json!({
            "author": "Nadia K.",
            "neighbourhood": "Verdun",
            "rating": 4,
            "quote": "Très bon travail.",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let reviews = json["data"].as_array().unwrap();
    assert_eq!(reviews.len(), 7);
    let created = reviews.iter().find(|r| r["author"] == "Nadia K.").unwrap();
    assert_eq!(created["isVisible"], true);
    let id = created["id"].as_i64().unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/reviews/{id}"),
        &token,
        serde_json::json!({ "isVisible": false }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let public = body_json(common::get(app.clone(), "/api/v1/pages/reviews").await).await;
    assert!(public["data"]["reviews"]
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["author"] != "Nadia K."));

    let response = delete_auth(
        app,
        &format!("/api/v1/admin/reviews/{id}?confirm=true"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 6);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn review_and_service_updates_are_trimmed(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = login(app.clone()).await;
    let (review_id,): (i64,) = sqlx::query_as("SELECT id FROM reviews WHERE author = 'Marc A.'")
        .fetch_one(&pool)
        .await
        .unwrap();
    let (service_id,): (i64,) = sqlx::query_as("SELECT id FROM services WHERE icon = 'Car'")
        .fetch_one(&pool)
        .await
        .unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/reviews/{review_id}"),
        &token,
        serde_json::json!({ "author": "  Marc Aubin  ", "quote": " Impeccable. " }),
    )
    .await;
    let json = body_json(response).await;
    let review = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == review_id)
        .unwrap();
    assert_eq!(review["author"], "Marc Aubin");
    assert_eq!(review["quote"], "Impeccable.");

    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/services/{service_id}"),
        &token,
        serde_json::json!({ "title": " Borne VE ", "description": " Niveau 2. " }),
    )
    .await;
    let json = body_json(response).await;
    let service = find_by_title(&json["data"], "Borne VE");
    assert_eq!(service["description"], "Niveau 2.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn review_rating_out_of_range_is_refused(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login(app.clone()).await;

    let response = post_json_auth(
        app,
        "/api/v1/admin/reviews",
        &token,
        serde_json::json!({ "author": "X", "rating": 6, "quote": "..." }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn new_service_goes_last(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login(app.clone()).await;

    let response = post_json_auth(
        app,
        "/api/v1/admin/services",
        &token,
        serde_json::json!({
            "title": "Inspection thermographique",
            "description": "Détection des points chauds.",
            "icon": "ShieldCheck",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let services = json["data"].as_array().unwrap();
    assert_eq!(services.len(), 7);
    assert_eq!(services[6]["title"], "Inspection thermographique");
    assert_eq!(services[6]["displayOrder"], 7);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_service_icon_is_refused(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login(app.clone()).await;

    let response = post_json_auth(
        app,
        "/api/v1/admin/services",
        &token,
        serde_json::json!({ "title": "T", "description": "D", "icon": "Rocket" }),
    )
    .await;
    assert!(response.status().is_client_error());
}

// ---------------------------------------------------------------------------
// Submissions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn submission_mark_read_and_delete(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login(app.clone()).await;

    let response = post_json(
        app.clone(),
        "/api/v1/contact",
        serde_json::json!({
            "name": "Luc P.",
            "phone": "514-555-0133",
            "email": "luc@example.com",
            "service": "Autre",
            "description": "Prise extérieure.",
        }),
    )
    .await;
    let id = body_json(response).await["data"]["submissionId"].as_i64().unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/submissions/{id}"),
        &token,
        serde_json::json!({ "isRead": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["isRead"], true);

    let response = delete_auth(
        app.clone(),
        &format!("/api/v1/admin/submissions/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = delete_auth(
        app,
        &format!("/api/v1/admin/submissions/{id}?confirm=true"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());
}
