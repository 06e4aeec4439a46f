use std::sync::Arc;

use axum_test::TestServer;
use cooksense_api::application::http::server::http_server::{router, state};
use cooksense_api::args::{Args, LlmArgs, ServerArgs};
use serde_json::json;

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
async fn empty_ingredients_return_empty_array_without_model_call() {
    let server = test_server().await;

    // The service short-circuits before the (unreachable in tests) LLM call.
    let response = server
        .post("/generate")
        .json(&json!({
            "ingredients": [],
            "kitchenware": ["wok"],
            "ageGroup": "adult",
            "people": 2,
            "cuisine": "western"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn zero_people_is_rejected() {
    let server = test_server().await;

    let response = server
        .post("/generate")
        .json(&json!({
            "ingredients": ["chicken"],
            "people": 0
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn zero_max_calories_is_rejected() {
    let server = test_server().await;

    let response = server
        .post("/generate")
        .json(&json!({
            "ingredients": ["chicken"],
            "maxCalories": 0
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn missing_fields_fall_back_to_defaults() {
    let server = test_server().await;

    // Only an empty ingredient list: defaults apply and the handler still
    // answers 200 with an empty array.
    let response = server.post("/generate").json(&json!({})).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!([]));
}
