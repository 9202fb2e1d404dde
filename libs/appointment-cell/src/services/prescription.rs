use reqwest::Method;
use tracing::{debug, error};

use shared_api::{segment, ApiClient};
use shared_config::PortalConfig;
use shared_models::{ActionResult, MessageBody, Prescription, PrescriptionEnvelope, ServiceError};

const PRESCRIPTION_API: &str = "/prescription";

pub struct PrescriptionService {
    api: ApiClient,
}

impl PrescriptionService {
    pub fn new(config: &PortalConfig) -> Self {
        Self::with_client(ApiClient::new(config))
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn save_prescription(&self, prescription: &Prescription, token: &str) -> ActionResult {
        debug!("Saving prescription for appointment {}", prescription.appointment_id);

        let body = match serde_json::to_value(prescription) {
            Ok(body) => body,
            Err(e) => {
                error!("Error saving prescription: {}", e);
                return ActionResult::failed("Failed to save prescription");
            }
        };

        let path = format!("{}/{}", PRESCRIPTION_API, segment(token));
        match self
            .api
            .exchange::<MessageBody>(Method::POST, &path, Some(body))
            .await
        {
            Ok((status, body)) if status.is_success() => {
                ActionResult::ok(body.text().unwrap_or("Prescription saved"))
            }
            Ok((status, body)) => {
                let message = body.text().unwrap_or("Failed to save prescription").to_string();
                error!("Prescription rejected ({}): {}", status, message);
                ActionResult::failed(message)
            }
            Err(e) => {
                error!("Error saving prescription: {}", e);
                ActionResult::failed("Failed to save prescription")
            }
        }
    }

    pub async fn try_get_prescription(
        &self,
        appointment_id: i64,
        token: &str,
    ) -> Result<Option<Prescription>, ServiceError> {
        let path = format!("{}/{}/{}", PRESCRIPTION_API, appointment_id, segment(token));
        let envelope: PrescriptionEnvelope = self.api.request(Method::GET, &path, None).await?;
        Ok(envelope.prescription)
    }

    pub async fn get_prescription(&self, appointment_id: i64, token: &str) -> Option<Prescription> {
        match self.try_get_prescription(appointment_id, token).await {
            Ok(prescription) => prescription,
            Err(e) => {
                error!("Error fetching prescription: {}", e);
                None
            }
        }
    }
}
