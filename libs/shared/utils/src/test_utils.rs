use std::sync::Mutex;

use serde_json::json;

use shared_config::PortalConfig;

use crate::notify::Notifier;

pub const TEST_TOKEN: &str = "test-session-token";

pub struct TestConfig {
    pub api_base_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
        }
    }
}

impl TestConfig {
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Self { api_base_url: api_base_url.into() }
    }

    pub fn to_portal_config(&self) -> PortalConfig {
        PortalConfig::new(self.api_base_url.clone())
    }
}

/// Notifier that keeps every alert so tests can assert on them.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }
}

pub struct MockClinicResponses;

impl MockClinicResponses {
    pub fn doctor(id: i64, name: &str, specialty: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "specialty": specialty,
            "email": format!("doctor{}@clinic.test", id),
            "phone": "555-0100",
            "availableTimes": ["09:00-10:00", "14:00-15:00"]
        })
    }

    pub fn doctors(doctors: Vec<serde_json::Value>) -> serde_json::Value {
        json!({ "doctors": doctors })
    }

    pub fn appointment(id: i64, patient_name: &str, status: i64) -> serde_json::Value {
        json!({
            "id": id,
            "patientId": 100 + id,
            "patientName": patient_name,
            "patientPhone": "555-0101",
            "patientEmail": format!("{}@x.com", patient_name.to_lowercase()),
            "doctorId": 1,
            "date": "2025-03-14",
            "time": "10:00",
            "status": status
        })
    }

    pub fn appointments(appointments: Vec<serde_json::Value>) -> serde_json::Value {
        json!({ "appointments": appointments })
    }

    pub fn patient(id: i64, name: &str) -> serde_json::Value {
        json!({
            "patient": {
                "id": id,
                "name": name,
                "email": format!("{}@x.com", name.to_lowercase()),
                "phone": "555-0101",
                "address": "1 Main St"
            }
        })
    }

    pub fn message(message: &str) -> serde_json::Value {
        json!({ "message": message })
    }

    pub fn error_response(message: &str) -> serde_json::Value {
        json!({ "error": message })
    }
}
