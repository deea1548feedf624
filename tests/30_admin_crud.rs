mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

fn sample_post(slug: &str) -> serde_json::Value {
    json!({
        "title": "Tips Memilih Essential Oil",
        "slug": slug,
        "excerpt": "Panduan singkat memilih essential oil.",
        "content": "Essential oil menentukan karakter aroma lilin Anda.",
        "imageUrl": "https://example.com/oil.jpg",
    })
}

#[tokio::test]
async fn blog_post_lifecycle() -> Result<()> {
    let app = common::test_app();
    let token = common::login(&app).await;

    // Create
    let (status, created) = common::send(
        &app,
        "POST",
        "/api/admin/blog",
        Some(&token),
        Some(sample_post("tips-essential-oil")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["featured"], false);
    let published_at = created["publishedAt"].clone();
    assert!(published_at.is_string());

    // Visible publicly by slug
    let (status, fetched) =
        common::send(&app, "GET", "/api/blog/tips-essential-oil", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Tips Memilih Essential Oil");

    // Partial update leaves untouched fields alone, publishedAt included
    let (status, updated) = common::send(
        &app,
        "PUT",
        "/api/admin/blog/1",
        Some(&token),
        Some(json!({ "featured": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["featured"], true);
    assert_eq!(updated["title"], "Tips Memilih Essential Oil");
    assert_eq!(updated["publishedAt"], published_at);

    // Delete, then both admin update and public fetch 404
    let (status, body) =
        common::send(&app, "DELETE", "/api/admin/blog/1", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Blog post deleted successfully" }));

    let (status, _) = common::send(
        &app,
        "PUT",
        "/api/admin/blog/1",
        Some(&token),
        Some(json!({ "featured": false })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) =
        common::send(&app, "GET", "/api/blog/tips-essential-oil", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn duplicate_blog_slug_is_a_validation_error() -> Result<()> {
    let app = common::test_app();
    let token = common::login(&app).await;

    let (status, _) = common::send(
        &app,
        "POST",
        "/api/admin/blog",
        Some(&token),
        Some(sample_post("lilin-soy")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/admin/blog",
        Some(&token),
        Some(sample_post("lilin-soy")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0], json!({ "field": "slug", "rule": "unique" }));
    Ok(())
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() -> Result<()> {
    let app = common::test_app();
    let token = common::login(&app).await;

    let (_, first) = common::send(
        &app,
        "POST",
        "/api/admin/blog",
        Some(&token),
        Some(sample_post("one")),
    )
    .await;
    assert_eq!(first["id"], 1);

    common::send(&app, "DELETE", "/api/admin/blog/1", Some(&token), None).await;

    let (_, second) = common::send(
        &app,
        "POST",
        "/api/admin/blog",
        Some(&token),
        Some(sample_post("two")),
    )
    .await;
    assert_eq!(second["id"], 2);
    Ok(())
}

#[tokio::test]
async fn testimonial_rating_out_of_range_is_rejected() -> Result<()> {
    let app = common::test_app();
    let token = common::login(&app).await;

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/admin/testimonials",
        Some(&token),
        Some(json!({
            "name": "Budi",
            "location": "Bandung",
            "workshop": "Workshop Dasar",
            "rating": 6,
            "content": "Sangat menyenangkan!",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0], json!({ "field": "rating", "rule": "range" }));
    Ok(())
}

#[tokio::test]
async fn workshop_package_update_merges_supplied_fields() -> Result<()> {
    let app = common::test_app();
    let token = common::login(&app).await;

    let (status, created) = common::send(
        &app,
        "POST",
        "/api/admin/workshop-packages",
        Some(&token),
        Some(json!({
            "name": "Premium",
            "price": 1500000,
            "duration": "5 jam",
            "description": "Termasuk bahan premium",
            "features": ["Soy wax", "Essential oil import"],
            "maxParticipants": 8,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["isActive"], true);

    let (status, updated) = common::send(
        &app,
        "PUT",
        "/api/admin/workshop-packages/1",
        Some(&token),
        Some(json!({ "isActive": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["isActive"], false);
    assert_eq!(updated["price"], 1500000);
    assert_eq!(updated["features"], json!(["Soy wax", "Essential oil import"]));

    let (_, body) = common::send(
        &app,
        "GET",
        "/api/admin/workshop-packages",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(body[0]["isActive"], false);
    Ok(())
}

#[tokio::test]
async fn settings_upsert_replaces_by_key() -> Result<()> {
    let app = common::test_app();
    let token = common::login(&app).await;

    let (status, first) = common::send(
        &app,
        "POST",
        "/api/admin/settings",
        Some(&token),
        Some(json!({ "key": "hero_title", "value": "Belajar Membuat Lilin", "type": "text" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["key"], "hero_title");

    let (status, second) = common::send(
        &app,
        "POST",
        "/api/admin/settings",
        Some(&token),
        Some(json!({ "key": "hero_title", "value": "Workshop Lilin Aromaterapi", "type": "text" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["value"], "Workshop Lilin Aromaterapi");

    // Still a single row, readable publicly
    let (status, body) = common::send(&app, "GET", "/api/settings", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["value"], "Workshop Lilin Aromaterapi");
    assert_eq!(rows[0]["type"], "text");
    Ok(())
}

#[tokio::test]
async fn export_category_delete_reports_kind() -> Result<()> {
    let app = common::test_app();
    let token = common::login(&app).await;

    let (status, created) = common::send(
        &app,
        "POST",
        "/api/admin/export-categories",
        Some(&token),
        Some(json!({
            "name": "Scented Candles",
            "description": "Soy-based scented candles",
            "products": ["Jar candle", "Pillar candle"],
            "moq": "500 pcs",
            "priceRange": "$2 - $5 / pc",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["displayOrder"], 0);

    let (status, body) = common::send(
        &app,
        "DELETE",
        "/api/admin/export-categories/1",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Export category deleted successfully" }));

    let (status, _) = common::send(
        &app,
        "DELETE",
        "/api/admin/export-categories/1",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn malformed_json_body_is_a_bad_request() -> Result<()> {
    use axum::body::Body;
    use tower::ServiceExt;

    let app = common::test_app();
    let token = common::login(&app).await;

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/admin/blog")
        .header("authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
