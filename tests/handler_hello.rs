mod common;

use serde_json::json;

#[tokio::test]
async fn test_text_endpoint() {
    let server = common::default_server();

    let response = server.get("/api/text").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "Hello World!");
    assert!(
        response
            .header("content-type")
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );
}

#[tokio::test]
async fn test_hello_endpoint() {
    let server = common::default_server();

    let response = server.get("/api/hello").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!({ "hello": "World" }));
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use todo_api::domain::policy::TodoPolicy;
    use todo_api::routes::app_router;
    use tower::ServiceExt;

    let app = app_router(common::create_memory_state(Vec::new(), TodoPolicy::default()));

    let response = app
        .oneshot(Request::get("/api/hello/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
