use alimenta::serverless::{FunctionRequest, handle};
use alimenta::services::chat_proxy::{ChatProxy, ChatProxyConfig};

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn proxy_for(server: &MockServer) -> ChatProxy {
    ChatProxy::new(ChatProxyConfig {
        api_key: Some("fn-key".into()),
        endpoint: format!("{}/chat/completions", server.uri()),
        ..ChatProxyConfig::default()
    })
}

fn post(body: &str) -> FunctionRequest {
    FunctionRequest {
        method: "POST".into(),
        body: body.into(),
    }
}

#[tokio::test]
async fn test_function_relays_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({ "model": "sonar-pro" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Use day-old bread." } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let res = handle(&proxy_for(&server), post(r#"{"message":"french toast?"}"#)).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body, json!({ "reply": "Use day-old bread." }));
}

#[tokio::test]
async fn test_function_ignores_status_but_fails_without_choices() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({ "error": { "message": "rate limited" } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let res = handle(&proxy_for(&server), post(r#"{"message":"hi"}"#)).await;

    assert_eq!(res.status, 500);
    assert_eq!(res.body, json!({ "error": "Failed to communicate with AI" }));
}

#[tokio::test]
async fn test_function_decodes_error_status_body_with_choices() {
    // Status is not inspected: a body with choices is still a reply.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Still here." } }]
        })))
        .mount(&server)
        .await;

    let res = handle(&proxy_for(&server), post(r#"{"message":"hi"}"#)).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["reply"], "Still here.");
}

#[tokio::test]
async fn test_function_rejects_bad_body() {
    let server = MockServer::start().await;

    let res = handle(&proxy_for(&server), post("not json")).await;

    assert_eq!(res.status, 400);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_function_reads_content_without_role() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "Use day-old bread." } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let res = handle(&proxy_for(&server), post(r#"{"message":"french toast?"}"#)).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body, json!({ "reply": "Use day-old bread." }));
}

#[tokio::test]
async fn test_function_method_match_is_exact() {
    let server = MockServer::start().await;

    for verb in ["post", "Post", "GET", "PUT"] {
        let res = handle(
            &proxy_for(&server),
            FunctionRequest {
                method: verb.into(),
                body: r#"{"message":"hi"}"#.into(),
            },
        )
        .await;

        assert_eq!(res.status, 405, "method {verb}");
        assert_eq!(res.body, json!({ "error": "Method not allowed" }));
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}
