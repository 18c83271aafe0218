//! Credential injection tests.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use yabadu_lib::{ApiClient, Configuration, ConfigurationBuilder};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn units_server() -> MockServer {
    MockServer::start().await
}

fn units_body() -> serde_json::Value {
    serde_json::json!({"units": ["kg"]})
}

fn client(builder: ConfigurationBuilder) -> ApiClient {
    ApiClient::new(builder.build().unwrap()).unwrap()
}

#[tokio::test]
async fn test_access_token_sent_as_bearer() {
    let mock_server = units_server().await;

    Mock::given(method("GET"))
        .and(path("/system/units"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(units_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(Configuration::builder(mock_server.uri()).access_token("test-token"));
    client.system().system_units_get().await.unwrap();
}

#[tokio::test]
async fn test_api_key_sent_in_default_header() {
    let mock_server = units_server().await;

    Mock::given(method("GET"))
        .and(path("/system/units"))
        .and(header("x-api-key", "my-secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(units_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(Configuration::builder(mock_server.uri()).api_key("my-secret-key"));
    client.system().system_units_get().await.unwrap();

    let received = mock_server.received_requests().await.unwrap();
    assert!(!received[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_api_key_sent_in_custom_header() {
    let mock_server = units_server().await;

    Mock::given(method("GET"))
        .and(path("/system/units"))
        .and(header("api-key", "k1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(units_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(
        Configuration::builder(mock_server.uri())
            .api_key("k1")
            .api_key_header("Api-Key"),
    );
    client.system().system_units_get().await.unwrap();
}

#[tokio::test]
async fn test_api_key_sent_as_query_parameter() {
    let mock_server = units_server().await;

    Mock::given(method("GET"))
        .and(path("/system/units"))
        .and(query_param("api_key", "k2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(units_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(
        Configuration::builder(mock_server.uri())
            .api_key("k2")
            .api_key_query("api_key"),
    );
    client.system().system_units_get().await.unwrap();
}

#[tokio::test]
async fn test_basic_auth_header() {
    let mock_server = units_server().await;
    let expected = format!("Basic {}", STANDARD.encode("alice:hunter2"));

    Mock::given(method("GET"))
        .and(path("/system/units"))
        .and(header("authorization", expected.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(units_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(Configuration::builder(mock_server.uri()).basic_auth("alice", "hunter2"));
    client.system().system_units_get().await.unwrap();
}

#[tokio::test]
async fn test_default_headers_sent_with_every_request() {
    let mock_server = units_server().await;

    Mock::given(method("GET"))
        .and(header("x-client", "yabadu-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "units": [],
            "genders": []
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client(Configuration::builder(mock_server.uri()).header("X-Client", "yabadu-tests"));
    client.system().system_units_get().await.unwrap();
    client.system().system_genders_get().await.unwrap();
}

#[tokio::test]
async fn test_clients_with_different_credentials_coexist() {
    let mock_server = units_server().await;

    Mock::given(method("GET"))
        .and(header("authorization", "Bearer first"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"units": ["a"]})))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(header("authorization", "Bearer second"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"units": ["b"]})))
        .mount(&mock_server)
        .await;

    let first = client(Configuration::builder(mock_server.uri()).access_token("first"));
    let second = client(Configuration::builder(mock_server.uri()).access_token("second"));

    let (first_system, second_system) = (first.system(), second.system());
    let (a, b) = tokio::join!(
        first_system.system_units_get(),
        second_system.system_units_get()
    );
    assert_eq!(a.unwrap().units, vec!["a"]);
    assert_eq!(b.unwrap().units, vec!["b"]);
}
