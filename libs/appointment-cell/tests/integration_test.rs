use assert_matches::assert_matches;
use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use appointment_cell::{AppointmentRecordService, PrescriptionService};
use shared_config::PortalConfig;
use shared_models::{Prescription, ServiceError};
use shared_utils::test_utils::{MockClinicResponses, TestConfig, TEST_TOKEN};

fn config_for(mock_server: &MockServer) -> PortalConfig {
    TestConfig::with_base_url(mock_server.uri()).to_portal_config()
}

fn march_14() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

#[tokio::test]
async fn test_get_all_appointments_for_day() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/appointments/2025-03-14/null/{}", TEST_TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockClinicResponses::appointments(vec![
            MockClinicResponses::appointment(1, "Jo", 0),
            MockClinicResponses::appointment(2, "Ana", 0),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = AppointmentRecordService::new(&config_for(&mock_server));
    let appointments = service
        .get_all_appointments(march_14(), None, TEST_TOKEN)
        .await
        .unwrap();

    assert_eq!(appointments.len(), 2);
    assert_eq!(appointments[1].patient_name, "Ana");
}

#[tokio::test]
async fn test_get_all_appointments_by_patient_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/appointments/2025-03-14/Jo%20Ann/{}", TEST_TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockClinicResponses::appointments(vec![
            MockClinicResponses::appointment(1, "Jo Ann", 0),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = AppointmentRecordService::new(&config_for(&mock_server));
    let appointments = service
        .get_all_appointments(march_14(), Some("Jo Ann"), TEST_TOKEN)
        .await
        .unwrap();

    assert_eq!(appointments.len(), 1);
}

#[tokio::test]
async fn test_get_all_appointments_surfaces_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/appointments/2025-03-14/null/{}", TEST_TOKEN)))
        .respond_with(ResponseTemplate::new(401).set_body_json(MockClinicResponses::error_response("Invalid or expired token")))
        .mount(&mock_server)
        .await;

    let service = AppointmentRecordService::new(&config_for(&mock_server));
    let result = service.get_all_appointments(march_14(), None, TEST_TOKEN).await;

    assert_matches!(result, Err(ServiceError::Status { status: 401, .. }));
}

#[tokio::test]
async fn test_save_prescription() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/prescription/{}", TEST_TOKEN)))
        .and(body_json(json!({
            "patientName": "Jo",
            "appointmentId": 7,
            "medication": "Amoxicillin",
            "dosage": "500mg"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(MockClinicResponses::message("Prescription saved")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let prescription = Prescription {
        patient_name: "Jo".into(),
        appointment_id: 7,
        medication: "Amoxicillin".into(),
        dosage: "500mg".into(),
        ..Default::default()
    };

    let result = PrescriptionService::new(&config_for(&mock_server))
        .save_prescription(&prescription, TEST_TOKEN)
        .await;

    assert!(result.success);
    assert_eq!(result.message, "Prescription saved");
}

#[tokio::test]
async fn test_save_prescription_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/prescription/{}", TEST_TOKEN)))
        .respond_with(ResponseTemplate::new(401).set_body_json(MockClinicResponses::error_response("Invalid or expired token")))
        .mount(&mock_server)
        .await;

    let result = PrescriptionService::new(&config_for(&mock_server))
        .save_prescription(&Prescription::default(), TEST_TOKEN)
        .await;

    assert!(!result.success);
    assert_eq!(result.message, "Invalid or expired token");
}

#[tokio::test]
async fn test_get_prescription() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/prescription/7/{}", TEST_TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "prescription": {
                "id": "rx-1",
                "patientName": "Jo",
                "appointmentId": 7,
                "medication": "Amoxicillin",
                "dosage": "500mg",
                "doctorNotes": "after meals"
            }
        })))
        .mount(&mock_server)
        .await;

    let service = PrescriptionService::new(&config_for(&mock_server));
    let prescription = service.get_prescription(7, TEST_TOKEN).await.unwrap();

    assert_eq!(prescription.medication, "Amoxicillin");
    assert_eq!(prescription.doctor_notes.as_deref(), Some("after meals"));
    assert!(service.get_prescription(8, TEST_TOKEN).await.is_none());
}
