//! Integration tests for the Applications, Authentication, TargetGeneration
//! and Default facades.

use std::time::Duration;

use yabadu_lib::models::{
    LoginRequest, RefreshRequest, TargetGenerationRequest, TargetGenerationStatus,
};
use yabadu_lib::{ApiClient, Configuration, ErrorKind};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(Configuration::builder(server.uri()).build().unwrap()).unwrap()
}

#[tokio::test]
async fn test_list_private_label_applications() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/private-label/applications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "applications": [
                {"id": "app-1", "name": "Acme", "bundleId": "com.acme", "active": true},
                {"id": "app-2", "name": "Beta"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let list = client
        .applications()
        .private_label_applications_get()
        .await
        .unwrap();

    assert_eq!(list.applications.len(), 2);
    assert_eq!(list.applications[0].bundle_id.as_deref(), Some("com.acme"));
    assert!(!list.applications[1].active);
}

#[tokio::test]
async fn test_get_application_encodes_identifier() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/private-label/applications/acme%20app"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "acme app",
            "name": "Acme"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let app = client
        .applications()
        .private_label_application_get("acme app")
        .await
        .unwrap();
    assert_eq!(app.id, "acme app");
}

#[tokio::test]
async fn test_login_posts_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({"username": "alice", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "accessToken": "issued",
            "refreshToken": "again",
            "expiresIn": 900
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let tokens = client
        .authentication()
        .auth_login_post(&LoginRequest::new("alice", "hunter2"))
        .await
        .unwrap();

    assert_eq!(tokens.access_token, "issued");
    assert_eq!(tokens.refresh_token.as_deref(), Some("again"));
    assert_eq!(tokens.expires_in, Some(900));
}

#[tokio::test]
async fn test_refresh_then_use_issued_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_json(serde_json::json!({"refreshToken": "r1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"accessToken": "fresh"})),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let anonymous = client_for(&mock_server);
    let tokens = anonymous
        .authentication()
        .auth_refresh_post(&RefreshRequest {
            refresh_token: "r1".to_string(),
        })
        .await
        .unwrap();

    let authed = ApiClient::new(
        Configuration::builder(mock_server.uri())
            .access_token(tokens.access_token)
            .build()
            .unwrap(),
    )
    .unwrap();
    let health = authed.default_api().health_get().await.unwrap();
    assert!(health.is_healthy());
}

#[tokio::test]
async fn test_logout_accepts_empty_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.authentication().auth_logout_post().await.unwrap();
}

#[tokio::test]
async fn test_target_generation_create_and_poll() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/target-generation"))
        .and(body_json(serde_json::json!({"applicationId": "app-1", "unit": "kg"})))
        .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
            "id": "job-9",
            "status": "pending"
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/target-generation/job-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "job-9",
            "status": "completed",
            "targets": [{"weight": 70}]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let api = client.target_generation();

    let job = api
        .target_generation_post(&TargetGenerationRequest {
            application_id: "app-1".to_string(),
            unit: Some("kg".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(job.status, TargetGenerationStatus::Pending);

    let job = api.target_generation_get(&job.id).await.unwrap();
    assert!(job.status.is_terminal());
    assert_eq!(job.targets.len(), 1);
}

#[tokio::test]
async fn test_target_generation_missing_job_is_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/target-generation/unknown"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"error": "not found"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .target_generation()
        .target_generation_get("unknown")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": "ok"}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let config = Configuration::builder(mock_server.uri())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let client = ApiClient::new(config).unwrap();

    let err = client.default_api().health_get().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(err.message().contains("timed out"));
}

#[tokio::test]
async fn test_application_get_rejects_dot_segments() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    for id in ["", ".", ".."] {
        let err = client
            .applications()
            .private_label_application_get(id)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other, "id {id:?}");
        assert!(err.message().contains("applicationId"));
    }

    let received = mock_server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_target_generation_get_rejects_dot_segments() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    for id in ["", ".", ".."] {
        let err = client
            .target_generation()
            .target_generation_get(id)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other, "id {id:?}");
        assert!(err.message().contains("jobId"));
    }

    let received = mock_server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_identifier_edge_cases_stay_in_one_segment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "job",
            "status": "running"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let api = client.target_generation();
    for id in ["%2E%2E", "../health", "a/b", "...", "v1.2"] {
        api.target_generation_get(id).await.unwrap();
    }

    let paths: Vec<String> = mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|request| request.url.path().to_string())
        .collect();
    assert_eq!(
        paths,
        vec![
            "/target-generation/%252E%252E",
            "/target-generation/..%2Fhealth",
            "/target-generation/a%2Fb",
            "/target-generation/...",
            "/target-generation/v1.2",
        ]
    );
}
