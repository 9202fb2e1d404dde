use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use auth_cell::{dashboard_path, AdminService};
use shared_models::{AdminLoginRequest, UserRole};
use shared_utils::test_utils::{MockClinicResponses, TestConfig};

fn create_service(mock_server: &MockServer) -> AdminService {
    AdminService::new(&TestConfig::with_base_url(mock_server.uri()).to_portal_config())
}

#[tokio::test]
async fn test_admin_login_success_leads_to_dashboard() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/login"))
        .and(body_json(json!({ "username": "admin", "password": "admin@1234" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "admin-token" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = create_service(&mock_server)
        .admin_login(&AdminLoginRequest { username: "admin".into(), password: "admin@1234".into() })
        .await
        .unwrap();

    assert!(response.ok());
    let token = response.token().await.unwrap();
    assert_eq!(dashboard_path(UserRole::Admin, &token), "/adminDashboard/admin-token");
}

#[tokio::test]
async fn test_admin_login_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(MockClinicResponses::error_response("Invalid credentials")))
        .mount(&mock_server)
        .await;

    let response = create_service(&mock_server)
        .admin_login(&AdminLoginRequest { username: "admin".into(), password: "nope".into() })
        .await
        .unwrap();

    assert!(!response.ok());
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn test_admin_login_unreachable_backend() {
    let service = AdminService::new(&TestConfig::with_base_url("http://127.0.0.1:9").to_portal_config());
    let response = service
        .admin_login(&AdminLoginRequest { username: "admin".into(), password: "x".into() })
        .await;

    assert!(response.is_none());
}
