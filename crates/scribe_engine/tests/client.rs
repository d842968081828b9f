use std::time::Duration;

use scribe_engine::{
    ClientSettings, FailureKind, GenerateApi, GenerateRequest, ReqwestApiClient,
};
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestApiClient {
    ReqwestApiClient::new(ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
}

fn request() -> GenerateRequest {
    GenerateRequest {
        prompt: "write about rust".to_string(),
        article_count: 2,
        delay_seconds: 5,
        auto_save: true,
    }
}

#[tokio::test]
async fn generate_posts_camel_case_payload_and_parses_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_json(serde_json::json!({
            "prompt": "write about rust",
            "articleCount": 2,
            "delaySeconds": 5,
            "autoSave": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "articleNumber": 1,
                "success": true,
                "message": "generated",
                "originalContent": "first draft",
                "replacedContent": "second draft",
                "savedFilePath": "/out/article_1.txt"
            },
            {
                "articleNumber": 2,
                "success": false,
                "message": "오류"
            }
        ])))
        .mount(&server)
        .await;

    let results = client_for(&server).generate(&request()).await.expect("generate ok");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].article_number, 1);
    assert!(results[0].success);
    assert_eq!(results[0].original_content.as_deref(), Some("first draft"));
    assert_eq!(results[0].saved_file_path.as_deref(), Some("/out/article_1.txt"));
    assert_eq!(results[1].article_number, 2);
    assert!(!results[1].success);
    assert_eq!(results[1].message.as_deref(), Some("오류"));
    assert!(results[1].original_content.is_none());
    assert!(results[1].saved_file_path.is_none());
}

#[tokio::test]
async fn generate_accepts_error_body_under_5xx_status() {
    // Whole-job failures come back as a result list with a 500 status.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!([
            { "articleNumber": 0, "success": false, "message": "whole job failed" }
        ])))
        .mount(&server)
        .await;

    let results = client_for(&server).generate(&request()).await.expect("decodable body");
    assert_eq!(results.len(), 1);
    assert!(!results[0].success);
}

#[tokio::test]
async fn generate_fails_with_status_kind_on_undecodable_error_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).generate(&request()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(502));
}

#[tokio::test]
async fn generate_fails_with_invalid_response_on_garbled_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).generate(&request()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidResponse);
}

#[tokio::test]
async fn generate_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(serde_json::json!([])),
        )
        .mount(&server)
        .await;

    let client = ReqwestApiClient::new(ClientSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    });

    let err = client.generate(&request()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn save_posts_form_params_and_parses_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/save"))
        .and(body_string_contains("original=first+draft"))
        .and(body_string_contains("number=3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "articleNumber": 3,
            "success": true,
            "message": "saved",
            "savedFilePath": "/out/article_3.txt"
        })))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .save_article("first draft", "second draft", 3)
        .await
        .expect("save ok");

    assert!(result.success);
    assert_eq!(result.saved_file_path.as_deref(), Some("/out/article_3.txt"));
}

#[tokio::test]
async fn health_returns_body_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("backend is running"))
        .mount(&server)
        .await;

    let body = client_for(&server).health().await.expect("health ok");
    assert_eq!(body, "backend is running");
}

#[tokio::test]
async fn health_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).health().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn invalid_base_url_is_rejected_before_any_call() {
    let client = ReqwestApiClient::new(ClientSettings {
        base_url: "not a url".to_string(),
        ..ClientSettings::default()
    });

    let err = client.generate(&request()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidBaseUrl);
}
