use std::sync::Arc;

use axum_test::TestServer;
use axum_test::multipart::MultipartForm;
use cooksense_api::application::http::server::http_server::{router, state};
use cooksense_api::args::{Args, LlmArgs, ServerArgs};

fn test_args() -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
            static_dir: "../static".to_string(),
        },
        llm: LlmArgs {
            gemini_api_key: "test-key".to_string(),
            gemini_text_model: "gemini-test".to_string(),
            gemini_vision_model: "gemini-test".to_string(),
        },
    }
}

async fn test_server() -> TestServer {
    let state = state(Arc::new(test_args())).await.expect("failed to build state");
    let router = router(state).expect("failed to build router");
    TestServer::new(router).expect("failed to start test server")
}

#[tokio::test]
async fn scan_fridge_without_image_field_is_rejected() {
    let server = test_server().await;

    let form = MultipartForm::new().add_text("note", "no image here");
    let response = server.post("/scan-fridge").multipart(form).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ingredients"], serde_json::json!([]));
    assert!(body["error"].as_str().unwrap().contains("image"));
}

#[tokio::test]
async fn scan_fridge_with_empty_image_is_rejected() {
    let server = test_server().await;

    let form = MultipartForm::new().add_text("image", "");
    let response = server.post("/scan-fridge").multipart(form).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn scan_fridge_with_undecodable_image_is_rejected() {
    let server = test_server().await;

    let form = MultipartForm::new().add_text("image", "definitely not image bytes");
    let response = server.post("/scan-fridge").multipart(form).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ingredients"], serde_json::json!([]));
}

#[tokio::test]
async fn analyze_calories_without_image_field_is_rejected() {
    let server = test_server().await;

    let form = MultipartForm::new().add_text("note", "no image here");
    let response = server.post("/analyze-calories").multipart(form).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["estimated_calories"], 0);
    assert!(body["error"].as_str().unwrap().contains("image"));
}

#[tokio::test]
async fn analyze_calories_with_empty_image_is_rejected() {
    let server = test_server().await;

    let form = MultipartForm::new().add_text("image", "");
    let response = server.post("/analyze-calories").multipart(form).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["estimated_calories"], 0);
}
