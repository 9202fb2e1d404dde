use assert_matches::assert_matches;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared_api::ApiClient;
use shared_config::PortalConfig;
use shared_models::{DoctorList, MessageBody, ServiceError};

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&PortalConfig::new(server.uri()))
}

#[tokio::test]
async fn test_request_decodes_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/doctor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "doctors": [{ "id": 1, "name": "Dr. Grey", "specialty": "cardiology" }]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let list: DoctorList = client.request(Method::GET, "/doctor", None).await.unwrap();

    assert_eq!(list.doctors.len(), 1);
    assert_eq!(list.doctors[0].name, "Dr. Grey");
}

#[tokio::test]
async fn test_request_maps_status_with_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/patient/bad-token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "Invalid or expired token"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let result: Result<Value, ServiceError> =
        client.request(Method::GET, "/patient/bad-token", None).await;

    assert_matches!(
        result,
        Err(ServiceError::Status { status: 401, ref message }) if message == "Invalid or expired token"
    );
}

#[tokio::test]
async fn test_request_reports_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/doctor"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let result: Result<DoctorList, ServiceError> = client.request(Method::GET, "/doctor", None).await;

    assert_matches!(result, Err(ServiceError::Decode(_)));
}

#[tokio::test]
async fn test_send_reports_transport_failure() {
    // Nothing listens on port 9 of the loopback interface.
    let client = ApiClient::new(&PortalConfig::new("http://127.0.0.1:9"));
    let result = client.send(Method::GET, "/doctor", None).await;

    assert_matches!(result, Err(ServiceError::Transport(_)));
}

#[tokio::test]
async fn test_exchange_reads_body_on_failure_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/patient"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "name": "Jo" })))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "Patient already exists"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let (status, body): (StatusCode, MessageBody) = client
        .exchange(Method::POST, "/patient", Some(json!({ "name": "Jo" })))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body.text(), Some("Patient already exists"));
}
