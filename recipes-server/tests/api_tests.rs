//! Integration tests for the recipes-server API endpoints
//!
//! Tests cover:
//! - Informational pages and the health endpoint
//! - Recipe create/list/get/replace/delete round trips
//! - Validation rejections (422) before any row is persisted
//! - Not-found outcomes (404) for absent ids
//! - Ingredient lookup-or-create sharing, including under concurrency

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use recipes_common::db::{init_database, RecipeStore};
use recipes_server::{build_router, AppState};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: a router plus store over a fresh file-backed database.
///
/// The TempDir must stay alive for the duration of the test, so it is
/// handed back to the caller.
async fn setup_app() -> (axum::Router, RecipeStore, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let pool = init_database(&dir.path().join("recipes.db"))
        .await
        .expect("init database");
    let store = RecipeStore::new(pool);
    let app = build_router(AppState::new(store.clone()));
    (app, store, dir)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

async fn recipe_count(store: &RecipeStore) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM recipes")
        .fetch_one(store.pool())
        .await
        .unwrap()
}

async fn ingredient_count_named(store: &RecipeStore, name: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM ingredients WHERE name = ?")
        .bind(name)
        .fetch_one(store.pool())
        .await
        .unwrap()
}

fn sample_recipe() -> Value {
    json!({
        "title": "Spaghetti Bolognese",
        "description": "A classic Italian pasta dish",
        "instructions": "Boil pasta. Prepare sauce. Combine and serve.",
        "rating": 4.5,
        "ingredient_names": ["Spaghetti", "Tomato"]
    })
}

// =============================================================================
// Informational Endpoints
// =============================================================================

#[tokio::test]
async fn test_welcome_page_serves_html() {
    let (app, _store, _dir) = setup_app().await;

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("Recipe Catalog"));
    assert!(text.contains("/help"));
}

#[tokio::test]
async fn test_help_guide_lists_endpoints() {
    let (app, _store, _dir) = setup_app().await;

    let response = app.oneshot(get("/help")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert!(body["endpoints"]["POST /recipes"].is_string());
    assert!(body["sample_payload_for_post_recipes"]["ingredient_names"].is_array());
}

#[tokio::test]
async fn test_health_endpoint_reports_version() {
    let (app, _store, _dir) = setup_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "recipes-server");
    assert!(body["version"].is_string());
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_recipe_returns_assigned_id_and_ingredients() {
    let (app, _store, _dir) = setup_app().await;

    let response = app
        .oneshot(json_request("POST", "/recipes", sample_recipe()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["title"], "Spaghetti Bolognese");
    assert_eq!(body["rating"], 4.5);

    let ingredients = body["ingredients"].as_array().unwrap();
    assert_eq!(ingredients.len(), 2);
    assert!(ingredients.iter().all(|i| i["id"].as_i64().unwrap() > 0));
}

#[tokio::test]
async fn test_created_recipe_can_be_fetched_back() {
    let (app, _store, _dir) = setup_app().await;

    let created = extract_json(
        app.clone()
            .oneshot(json_request("POST", "/recipes", sample_recipe()))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = app.oneshot(get(&format!("/recipes/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = extract_json(response.into_body()).await;
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["title"], created["title"]);
    assert_eq!(fetched["description"], created["description"]);
    assert_eq!(fetched["instructions"], created["instructions"]);
    assert_eq!(fetched["rating"], created["rating"]);
    assert_eq!(
        fetched["ingredients"].as_array().unwrap().len(),
        created["ingredients"].as_array().unwrap().len()
    );
}

#[tokio::test]
async fn test_ingredient_rows_are_shared_across_recipes() {
    let (app, store, _dir) = setup_app().await;

    for title in ["Salsa", "Gazpacho"] {
        let body = json!({"title": title, "ingredient_names": ["Tomato", "Onion"]});
        let response = app
            .clone()
            .oneshot(json_request("POST", "/recipes", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(ingredient_count_named(&store, "Tomato").await, 1);
    assert_eq!(ingredient_count_named(&store, "Onion").await, 1);
}

#[tokio::test]
async fn test_duplicate_ingredient_names_collapse_to_one_association() {
    let (app, store, _dir) = setup_app().await;

    let body = json!({"title": "Fries", "ingredient_names": ["Potato", "Potato", "Salt"]});
    let response = app
        .oneshot(json_request("POST", "/recipes", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let created = extract_json(response.into_body()).await;
    assert_eq!(created["ingredients"].as_array().unwrap().len(), 2);

    let pairs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipe_ingredient")
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(pairs, 2);
}

// =============================================================================
// Validation (rejected before the gateway is reached)
// =============================================================================

#[tokio::test]
async fn test_create_with_missing_title_is_rejected() {
    let (app, store, _dir) = setup_app().await;

    let before = recipe_count(&store).await;
    let body = json!({"description": "No title here", "ingredient_names": ["Salt"]});
    let response = app
        .oneshot(json_request("POST", "/recipes", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Nothing was persisted, not even ingredients
    assert_eq!(recipe_count(&store).await, before);
    assert_eq!(ingredient_count_named(&store, "Salt").await, 0);
}

#[tokio::test]
async fn test_create_with_blank_title_is_rejected() {
    let (app, store, _dir) = setup_app().await;

    let body = json!({"title": "   "});
    let response = app
        .oneshot(json_request("POST", "/recipes", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let error = extract_json(response.into_body()).await;
    assert!(error["error"].as_str().unwrap().contains("title"));
    assert_eq!(recipe_count(&store).await, 0);
}

#[tokio::test]
async fn test_create_with_non_numeric_rating_is_rejected() {
    let (app, store, _dir) = setup_app().await;

    let body = json!({"title": "Toast", "rating": "tasty"});
    let response = app
        .oneshot(json_request("POST", "/recipes", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(recipe_count(&store).await, 0);
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_list_on_empty_store_returns_empty_array() {
    let (app, _store, _dir) = setup_app().await;

    let response = app.oneshot(get("/recipes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_respects_skip_and_limit() {
    let (app, _store, _dir) = setup_app().await;

    for title in ["One", "Two", "Three"] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/recipes", json!({"title": title})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(get("/recipes?skip=1&limit=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let recipes = body.as_array().unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0]["title"], "Two");
}

#[tokio::test]
async fn test_list_rejects_negative_skip() {
    let (app, _store, _dir) = setup_app().await;

    let response = app.oneshot(get("/recipes?skip=-1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_rejects_zero_limit() {
    let (app, _store, _dir) = setup_app().await;

    let response = app.oneshot(get("/recipes?limit=0")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Get / Replace / Delete
// =============================================================================

#[tokio::test]
async fn test_get_unknown_recipe_returns_404() {
    let (app, _store, _dir) = setup_app().await;

    let response = app.oneshot(get("/recipes/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("recipe 999"));
}

#[tokio::test]
async fn test_replace_overwrites_scalars_and_ingredient_set() {
    let (app, store, _dir) = setup_app().await;

    let created = extract_json(
        app.clone()
            .oneshot(json_request(
                "POST",
                "/recipes",
                json!({"title": "Mix", "ingredient_names": ["A", "B"]}),
            ))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/recipes/{id}"),
            json!({"title": "Mix v2", "rating": 3.0, "ingredient_names": ["B", "C"]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = extract_json(response.into_body()).await;
    assert_eq!(updated["title"], "Mix v2");
    assert_eq!(updated["rating"], 3.0);

    let names: Vec<String> = updated["ingredients"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["B", "C"]);

    // Only the (recipe, B) and (recipe, C) pairs remain
    let pairs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipe_ingredient WHERE recipe_id = ?")
        .bind(id)
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(pairs, 2);

    // A's row still exists even though it is unreferenced now
    assert_eq!(ingredient_count_named(&store, "A").await, 1);
}

#[tokio::test]
async fn test_replace_clears_omitted_optional_fields() {
    let (app, _store, _dir) = setup_app().await;

    let created = extract_json(
        app.clone()
            .oneshot(json_request("POST", "/recipes", sample_recipe()))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/recipes/{id}"),
            json!({"title": "Plain"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = extract_json(response.into_body()).await;
    assert_eq!(updated["description"], Value::Null);
    assert_eq!(updated["instructions"], Value::Null);
    assert_eq!(updated["rating"], Value::Null);
    assert_eq!(updated["ingredients"], json!([]));
}

#[tokio::test]
async fn test_replace_unknown_recipe_returns_404() {
    let (app, _store, _dir) = setup_app().await;

    let response = app
        .oneshot(json_request(
            "PUT",
            "/recipes/999",
            json!({"title": "Ghost"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_removes_recipe_and_associations() {
    let (app, store, _dir) = setup_app().await;

    let created = extract_json(
        app.clone()
            .oneshot(json_request("POST", "/recipes", sample_recipe()))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let delete = Request::builder()
        .method("DELETE")
        .uri(format!("/recipes/{id}"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(delete).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["detail"], "Recipe deleted");

    // A deleted id is a not-found outcome, not a storage failure
    let response = app.oneshot(get(&format!("/recipes/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let pairs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipe_ingredient WHERE recipe_id = ?")
        .bind(id)
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(pairs, 0);

    // Ingredients stay behind as catalog entries
    assert_eq!(ingredient_count_named(&store, "Tomato").await, 1);
}

#[tokio::test]
async fn test_delete_unknown_recipe_returns_404() {
    let (app, _store, _dir) = setup_app().await;

    let delete = Request::builder()
        .method("DELETE")
        .uri("/recipes/999")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(delete).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test]
async fn test_concurrent_creates_share_new_ingredient_row() {
    let (app, store, _dir) = setup_app().await;

    // Two simultaneous requests both reference a brand-new ingredient name
    let first = tokio::spawn({
        let app = app.clone();
        async move {
            app.oneshot(json_request(
                "POST",
                "/recipes",
                json!({"title": "Aioli", "ingredient_names": ["Garlic"]}),
            ))
            .await
            .unwrap()
        }
    });
    let second = tokio::spawn({
        let app = app.clone();
        async move {
            app.oneshot(json_request(
                "POST",
                "/recipes",
                json!({"title": "Toum", "ingredient_names": ["Garlic"]}),
            ))
            .await
            .unwrap()
        }
    });

    let (first, second) = (first.await.unwrap(), second.await.unwrap());
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);

    // The uniqueness constraint held under concurrent writers
    assert_eq!(ingredient_count_named(&store, "Garlic").await, 1);

    let garlic_id: i64 = sqlx::query_scalar("SELECT id FROM ingredients WHERE name = 'Garlic'")
        .fetch_one(store.pool())
        .await
        .unwrap();
    for response in [first, second] {
        let body = extract_json(response.into_body()).await;
        assert_eq!(body["ingredients"][0]["id"].as_i64().unwrap(), garlic_id);
    }
}
