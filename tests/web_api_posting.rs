//! Web API Posting Tests
//!
//! Integration tests for posting endpoints.

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{bearer, mint_token, TestApp, TEST_SECRET};

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_posting_and_find_by_keyword() {
    let app = TestApp::new().await;
    let user_id = app.create_user("kylee").await;
    let category_id = app.create_category("notice").await;

    let response = app
        .server
        .post("/postings")
        .add_header(AUTHORIZATION, bearer(user_id))
        .json(&json!({
            "title": "t1",
            "content": "c1",
            "category_id": category_id
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({"message": "SUCCESS"}));

    let response = app.server.get("/postings").add_query_param("keyword", "t1").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let list = body["posting_list"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], "t1");
    assert_eq!(list[0]["content"], "c1");
    assert_eq!(list[0]["name"], "kylee");
    assert_eq!(list[0]["user_id"], user_id);
    assert_eq!(list[0]["category_id"], category_id);
    assert_eq!(list[0]["views"], 0);
}

#[tokio::test]
async fn test_create_posting_accepts_category_field() {
    let app = TestApp::new().await;
    let user_id = app.create_user("kylee").await;
    let category_id = app.create_category("notice").await;

    let response = app
        .server
        .post("/postings")
        .add_header(AUTHORIZATION, bearer(user_id))
        .json(&json!({
            "title": "test title",
            "content": "test content",
            "category": category_id
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_posting_missing_key() {
    let app = TestApp::new().await;
    let user_id = app.create_user("kylee").await;
    let category_id = app.create_category("notice").await;

    let response = app
        .server
        .post("/postings")
        .add_header(AUTHORIZATION, bearer(user_id))
        .json(&json!({
            "title": "test title",
            "contents": "test content",
            "category": category_id
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"message": "KEY_ERROR"}));
}

#[tokio::test]
async fn test_create_posting_invalid_json() {
    let app = TestApp::new().await;
    let user_id = app.create_user("kylee").await;

    let response = app
        .server
        .post("/postings")
        .add_header(AUTHORIZATION, bearer(user_id))
        .text("{\"title\": ")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"message": "JSON_DECODE_ERROR"}));
}

#[tokio::test]
async fn test_create_posting_non_object_body() {
    let app = TestApp::new().await;
    let user_id = app.create_user("kylee").await;

    let response = app
        .server
        .post("/postings")
        .add_header(AUTHORIZATION, bearer(user_id))
        .json(&json!([1]))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"message": "JSON_DECODE_ERROR"}));
}

#[tokio::test]
async fn test_create_posting_unknown_category() {
    let app = TestApp::new().await;
    let user_id = app.create_user("kylee").await;
    let category_id = app.create_category("notice").await;

    let response = app
        .server
        .post("/postings")
        .add_header(AUTHORIZATION, bearer(user_id))
        .json(&json!({
            "title": "test title",
            "content": "test content",
            "category": category_id + 1
        }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({"message": "CATEGORY_DOES_NOT_EXIST"}));
}

#[tokio::test]
async fn test_create_posting_validation_error() {
    let app = TestApp::new().await;
    let user_id = app.create_user("kylee").await;
    let category_id = app.create_category("notice").await;

    let response = app
        .server
        .post("/postings")
        .add_header(AUTHORIZATION, bearer(user_id))
        .json(&json!({
            "title": "",
            "content": "test content",
            "category_id": category_id
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"message": "VALIDATION_ERROR"}));
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_create_posting_requires_token() {
    let app = TestApp::new().await;
    let user_id = app.create_user("kylee").await;
    let category_id = app.create_category("notice").await;
    let body = json!({"title": "t", "content": "c", "category_id": category_id});

    let response = app.server.post("/postings").json(&body).await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_json(&json!({"message": "INVALID_TOKEN"}));

    let response = app
        .server
        .post("/postings")
        .add_header(AUTHORIZATION, "Bearer not-a-token".to_string())
        .json(&body)
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .post("/postings")
        .add_header(
            AUTHORIZATION,
            format!("Bearer {}", mint_token(user_id, TEST_SECRET, -3600)),
        )
        .json(&body)
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .post("/postings")
        .add_header(
            AUTHORIZATION,
            format!("Bearer {}", mint_token(user_id, "wrong-secret", 3600)),
        )
        .json(&body)
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_unknown_user() {
    let app = TestApp::new().await;
    let category_id = app.create_category("notice").await;

    let response = app
        .server
        .post("/postings")
        .add_header(AUTHORIZATION, bearer(999))
        .json(&json!({"title": "t", "content": "c", "category_id": category_id}))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_json(&json!({"message": "INVALID_TOKEN"}));
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn test_list_postings_filters() {
    let app = TestApp::new().await;
    let user_id = app.create_user("kylee").await;
    let notice = app.create_category("notice").await;
    let free = app.create_category("free").await;

    app.create_posting(user_id, notice, "Rust Tips").await;
    app.create_posting(user_id, free, "rusty pipes").await;
    app.create_posting(user_id, notice, "Lunch").await;

    let response = app.server.get("/postings").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["posting_list"].as_array().unwrap().len(), 3);

    let response = app.server.get("/postings?keyword=RUST").await;
    let body: Value = response.json();
    let titles: Vec<&str> = body["posting_list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Rust Tips", "rusty pipes"]);

    let response = app
        .server
        .get(&format!("/postings?keyword=rust&category_id={}", notice))
        .await;
    let body: Value = response.json();
    let list = body["posting_list"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], "Rust Tips");

    // An empty keyword does not filter.
    let response = app.server.get("/postings?keyword=").await;
    let body: Value = response.json();
    assert_eq!(body["posting_list"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_postings_unknown_category() {
    let app = TestApp::new().await;

    let response = app.server.get("/postings?category_id=42").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({"message": "CATEGORY_DOES_NOT_EXIST"}));
}

#[tokio::test]
async fn test_list_postings_bad_category_value() {
    let app = TestApp::new().await;

    let response = app.server.get("/postings?category_id=abc").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"message": "VALUE_ERROR"}));
}

#[tokio::test]
async fn test_list_postings_empty_category_is_ignored() {
    let app = TestApp::new().await;
    let user_id = app.create_user("kylee").await;
    let category_id = app.create_category("notice").await;
    app.create_posting(user_id, category_id, "t1").await;

    let response = app.server.get("/postings?keyword=t1&category_id=").await;
    response.assert_status_ok();
    let body: Value = response.json();
    let list = body["posting_list"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], "t1");
    assert_eq!(list[0]["name"], "kylee");
}

#[tokio::test]
async fn test_list_postings_keyword_non_ascii_case() {
    let app = TestApp::new().await;
    let user_id = app.create_user("kylee").await;
    let category_id = app.create_category("notice").await;
    app.create_posting(user_id, category_id, "Émile").await;
    app.create_posting(user_id, category_id, "Emile").await;

    let response = app
        .server
        .get("/postings")
        .add_query_param("keyword", "émile")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    let list = body["posting_list"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], "Émile");
}

// ============================================================================
// Detail and views
// ============================================================================

#[tokio::test]
async fn test_get_posting_counts_anonymous_views() {
    let app = TestApp::new().await;
    let user_id = app.create_user("kylee").await;
    let category_id = app.create_category("notice").await;
    let posting_id = app.create_posting(user_id, category_id, "Title").await;

    let response = app.server.get(&format!("/postings/{}", posting_id)).await;
    response.assert_status_ok();
    let body: Value = response.json();
    let info = &body["posting_info"];
    assert_eq!(info["id"], posting_id);
    assert_eq!(info["title"], "Title");
    assert_eq!(info["name"], "kylee");
    assert_eq!(info["category"], "notice");
    assert_eq!(info["comment_count"], 0);
    assert_eq!(info["views"], 1);

    let response = app.server.get(&format!("/postings/{}", posting_id)).await;
    let body: Value = response.json();
    assert_eq!(body["posting_info"]["views"], 2);

    // Authenticated reads do not count.
    let reader = app.create_user("wanted").await;
    let response = app
        .server
        .get(&format!("/postings/{}", posting_id))
        .add_header(AUTHORIZATION, bearer(reader))
        .await;
    let body: Value = response.json();
    assert_eq!(body["posting_info"]["views"], 2);
}

#[tokio::test]
async fn test_get_posting_not_found() {
    let app = TestApp::new().await;

    let response = app.server.get("/postings/1").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({"message": "POSTING_DOES_NOT_EXIST"}));
}

#[tokio::test]
async fn test_get_posting_bad_id() {
    let app = TestApp::new().await;

    let response = app.server.get("/postings/abc").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"message": "VALUE_ERROR"}));
}

// ============================================================================
// Update and delete
// ============================================================================

#[tokio::test]
async fn test_update_posting() {
    let app = TestApp::new().await;
    let user_id = app.create_user("kylee").await;
    let category_id = app.create_category("notice").await;
    let posting_id = app.create_posting(user_id, category_id, "Title").await;

    let response = app
        .server
        .post(&format!("/postings/{}", posting_id))
        .add_header(AUTHORIZATION, bearer(user_id))
        .json(&json!({"title": "New title"}))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({"message": "SUCCESS"}));

    let response = app
        .server
        .get(&format!("/postings/{}", posting_id))
        .add_header(AUTHORIZATION, bearer(user_id))
        .await;
    let body: Value = response.json();
    assert_eq!(body["posting_info"]["title"], "New title");
    assert_eq!(body["posting_info"]["content"], "content");
}

#[tokio::test]
async fn test_update_posting_by_other_user() {
    let app = TestApp::new().await;
    let author = app.create_user("kylee").await;
    let other = app.create_user("wanted").await;
    let category_id = app.create_category("notice").await;
    let posting_id = app.create_posting(author, category_id, "Title").await;

    let response = app
        .server
        .post(&format!("/postings/{}", posting_id))
        .add_header(AUTHORIZATION, bearer(other))
        .json(&json!({"title": "Hijacked"}))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_json(&json!({"message": "INVALID_USER"}));

    let response = app
        .server
        .get(&format!("/postings/{}", posting_id))
        .add_header(AUTHORIZATION, bearer(author))
        .await;
    let body: Value = response.json();
    assert_eq!(body["posting_info"]["title"], "Title");
}

#[tokio::test]
async fn test_update_missing_posting() {
    let app = TestApp::new().await;
    let user_id = app.create_user("kylee").await;

    let response = app
        .server
        .post("/postings/99")
        .add_header(AUTHORIZATION, bearer(user_id))
        .json(&json!({"title": "New"}))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({"message": "POSTING_DOES_NOT_EXIST"}));
}

#[tokio::test]
async fn test_delete_posting() {
    let app = TestApp::new().await;
    let author = app.create_user("kylee").await;
    let other = app.create_user("wanted").await;
    let category_id = app.create_category("notice").await;
    let posting_id = app.create_posting(author, category_id, "Title").await;

    let response = app
        .server
        .delete(&format!("/postings/{}", posting_id))
        .add_header(AUTHORIZATION, bearer(other))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_json(&json!({"message": "INVALID_USER"}));

    let response = app
        .server
        .delete(&format!("/postings/{}", posting_id))
        .add_header(AUTHORIZATION, bearer(author))
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({"message": "SUCCESS"}));

    let response = app.server.get(&format!("/postings/{}", posting_id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}
