mod common;

use axum::{
    body::Body,
    http::{header, Method, Request},
};
use common::{assert_error, spawn_app};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn unknown_paths_use_error_envelope() {
    let app = spawn_app().await;

    for uri in ["/", "/api", "/api/unknown", "/categories"] {
        let (status, body) = app.get(uri).await;
        assert_error(status, &body, 404, "Not Found");
    }
}

#[tokio::test]
async fn wrong_method_uses_error_envelope() {
    let app = spawn_app().await;

    let (status, body) = app.delete("/api/categories").await;
    assert_error(status, &body, 405, "Method Not Allowed");

    let (status, body) = app.get("/api/questions/search").await;
    assert_error(status, &body, 405, "Method Not Allowed");
}

#[tokio::test]
async fn body_that_is_not_json_is_bad_request() {
    let app = spawn_app().await;
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/questions/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = app.send(req).await;

    assert_error(status, &body, 400, "Bad Request");
}

#[tokio::test]
async fn responses_allow_any_origin() {
    let app = spawn_app().await;
    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/categories")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let resp = app.router.clone().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn metrics_expose_quiz_counter() {
    let app = spawn_app().await;
    app.insert_question("Science question", 1).await;
    let (status, _) = app
        .post("/api/quizzes", json!({"quiz_category": {"id": 1}}))
        .await;
    assert_eq!(status, 200);

    let req = Request::builder()
        .method(Method::GET)
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();
    let resp = app.router.clone().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), 200);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("trivia_quiz_questions_served_total"));
}

#[tokio::test]
async fn store_failure_on_read_is_internal_error() {
    let app = spawn_app().await;
    app.pool.close().await;

    let (status, body) = app.get("/api/categories").await;

    assert_error(status, &body, 500, "Internal Server Error");
}

#[tokio::test]
async fn metrics_count_created_and_deleted_questions() {
    let app = spawn_app().await;
    let (status, _) = app
        .post(
            "/api/questions",
            json!({"question": "q", "answer": "a", "category": 1, "difficulty": 1}),
        )
        .await;
    assert_eq!(status, 200);
    let id = app.insert_question("to delete", 1).await;
    let (status, _) = app.delete(&format!("/api/questions/{id}")).await;
    assert_eq!(status, 200);

    let req = Request::builder()
        .method(Method::GET)
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();
    let resp = app.router.clone().oneshot(req).await.unwrap();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(text.contains(r#"trivia_questions_modified_total{operation="create"}"#));
    assert!(text.contains(r#"trivia_questions_modified_total{operation="delete"}"#));
}
