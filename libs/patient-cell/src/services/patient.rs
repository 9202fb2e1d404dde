use std::sync::Arc;

use reqwest::Method;
use tracing::{debug, error};

use shared_api::{segment, segment_or_null, ApiClient, LoginResponse};
use shared_config::PortalConfig;
use shared_models::{
    ActionResult, Appointment, AppointmentList, LoginRequest, MessageBody, Patient,
    PatientEnvelope, ServiceError, SignupRequest, UserRole,
};
use shared_utils::{LogNotifier, Notifier};

const PATIENT_API: &str = "/patient";

pub const FILTER_FAILED_ALERT: &str = "Something went wrong while filtering appointments!";

pub struct PatientService {
    api: ApiClient,
    notifier: Arc<dyn Notifier>,
}

impl PatientService {
    pub fn new(config: &PortalConfig) -> Self {
        Self::with_client(ApiClient::new(config))
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self {
            api,
            notifier: Arc::new(LogNotifier),
        }
    }

    /// Routes the alerts this service raises to the given notifier.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Registers a new patient. A rejected signup carries the server's message.
    pub async fn patient_signup(&self, data: &SignupRequest) -> ActionResult {
        debug!("Signing up patient: {}", data.email);

        let body = match serde_json::to_value(data) {
            Ok(body) => body,
            Err(e) => {
                error!("Error :: patient_signup :: {}", e);
                return ActionResult::failed(e.to_string());
            }
        };

        match self
            .api
            .exchange::<MessageBody>(Method::POST, PATIENT_API, Some(body))
            .await
        {
            Ok((status, body)) => {
                let message = body.text().unwrap_or_default().to_string();
                if status.is_success() {
                    ActionResult::ok(message)
                } else {
                    error!("Error :: patient_signup :: {} {}", status, message);
                    ActionResult::failed(message)
                }
            }
            Err(e) => {
                error!("Error :: patient_signup :: {}", e);
                ActionResult::failed(e.to_string())
            }
        }
    }

    /// Returns the raw login response, or `None` if the backend could not be reached.
    pub async fn patient_login(&self, data: &LoginRequest) -> Option<LoginResponse> {
        debug!("Logging in patient: {}", data.email);

        let body = match serde_json::to_value(data) {
            Ok(body) => body,
            Err(e) => {
                error!("Error :: patient_login :: {}", e);
                return None;
            }
        };
        let path = format!("{}/login", PATIENT_API);

        match self.api.send(Method::POST, &path, Some(body)).await {
            Ok(response) => Some(LoginResponse::new(response)),
            Err(e) => {
                error!("Error :: patient_login :: {}", e);
                None
            }
        }
    }

    pub async fn try_get_patient_data(&self, token: &str) -> Result<Option<Patient>, ServiceError> {
        let path = format!("{}/{}", PATIENT_API, segment(token));
        let envelope: PatientEnvelope = self.api.request(Method::GET, &path, None).await?;
        Ok(envelope.patient)
    }

    pub async fn get_patient_data(&self, token: &str) -> Option<Patient> {
        match self.try_get_patient_data(token).await {
            Ok(patient) => patient,
            Err(e) => {
                error!("Error fetching patient details: {}", e);
                None
            }
        }
    }

    pub async fn try_get_patient_appointments(
        &self,
        id: i64,
        token: &str,
        role: UserRole,
    ) -> Result<Vec<Appointment>, ServiceError> {
        let path = format!("{}/{}/{}/{}", PATIENT_API, id, role, segment(token));
        debug!("Fetching appointments for patient {} as {}", id, role);

        let list: AppointmentList = self.api.request(Method::GET, &path, None).await?;
        Ok(list.appointments)
    }

    pub async fn get_patient_appointments(
        &self,
        id: i64,
        token: &str,
        role: UserRole,
    ) -> Option<Vec<Appointment>> {
        match self.try_get_patient_appointments(id, token, role).await {
            Ok(appointments) => Some(appointments),
            Err(e) => {
                error!("Error fetching patient appointments: {}", e);
                None
            }
        }
    }

    pub async fn try_filter_appointments(
        &self,
        condition: &str,
        name: &str,
        token: &str,
    ) -> Result<AppointmentList, ServiceError> {
        let path = format!(
            "{}/filter/{}/{}/{}",
            PATIENT_API,
            segment_or_null(Some(condition)),
            segment_or_null(Some(name)),
            segment(token),
        );
        debug!("Filtering appointments: condition={} name={}", condition, name);

        self.api.request(Method::GET, &path, None).await
    }

    /// Filters the patient's appointments by status and name. Any failure is shown
    /// to the user as an alert and yields an empty list.
    pub async fn filter_appointments(&self, condition: &str, name: &str, token: &str) -> AppointmentList {
        match self.try_filter_appointments(condition, name, token).await {
            Ok(list) => list,
            Err(e) => {
                error!("Error filtering appointments: {}", e);
                self.notifier.alert(FILTER_FAILED_ALERT);
                AppointmentList::default()
            }
        }
    }
}
