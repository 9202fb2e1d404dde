use std::sync::Arc;

use reqwest::{Method, StatusCode};
use tracing::{debug, error};

use shared_api::{segment, segment_or_null, ApiClient};
use shared_config::PortalConfig;
use shared_models::{ActionResult, Doctor, DoctorList, MessageBody, ServiceError};
use shared_utils::{LogNotifier, Notifier};

use crate::models::DoctorFilter;

const DOCTOR_API: &str = "/doctor";

pub const FILTER_FAILED_ALERT: &str = "Failed to filter doctors. Please try again.";

/// Client for the doctor directory endpoints.
///
/// The plain methods always settle: failures are logged and folded into an empty
/// list or a failed [`ActionResult`]. The `try_` variants keep the error so callers
/// can tell "no doctors" apart from "request failed".
pub struct DoctorService {
    api: ApiClient,
    notifier: Arc<dyn Notifier>,
}

impl DoctorService {
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

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub async fn try_get_doctors(&self) -> Result<Vec<Doctor>, ServiceError> {
        debug!("Fetching all doctors");
        let list: DoctorList = self.api.request(Method::GET, DOCTOR_API, None).await?;
        Ok(list.doctors)
    }

    pub async fn get_doctors(&self) -> Vec<Doctor> {
        match self.try_get_doctors().await {
            Ok(doctors) => doctors,
            Err(e) => {
                error!("Error fetching doctors: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn delete_doctor(&self, id: i64, token: &str) -> ActionResult {
        debug!("Deleting doctor {}", id);
        let path = format!("{}/{}/{}", DOCTOR_API, id, segment(token));
        let result = self
            .api
            .exchange::<MessageBody>(Method::DELETE, &path, None)
            .await;

        settle(result, "Doctor deleted successfully", "Failed to delete doctor")
    }

    pub async fn save_doctor(&self, doctor: &Doctor, token: &str) -> ActionResult {
        debug!("Saving doctor {}", doctor.name);
        let body = match serde_json::to_value(doctor) {
            Ok(body) => body,
            Err(e) => {
                error!("Error saving doctor: {}", e);
                return ActionResult::failed("Failed to save doctor");
            }
        };

        let path = format!("{}/{}", DOCTOR_API, segment(token));
        let result = self
            .api
            .exchange::<MessageBody>(Method::POST, &path, Some(body))
            .await;

        settle(result, "Doctor saved successfully", "Failed to save doctor")
    }

    pub async fn try_filter_doctors(&self, filter: &DoctorFilter) -> Result<DoctorList, ServiceError> {
        let path = format!(
            "{}/{}/{}/{}",
            DOCTOR_API,
            segment_or_null(filter.name.as_deref()),
            segment_or_null(filter.time.as_deref()),
            segment_or_null(filter.specialty.as_deref()),
        );
        debug!("Filtering doctors: {}", path);

        self.api.request(Method::GET, &path, None).await
    }

    /// Empty list on any failure. Unreachable backends and unreadable bodies also
    /// alert; a rejected status only logs.
    pub async fn filter_doctors(&self, filter: &DoctorFilter) -> DoctorList {
        match self.try_filter_doctors(filter).await {
            Ok(list) => list,
            Err(e) => {
                self.report_filter_failure(&e);
                DoctorList::default()
            }
        }
    }

    /// Logs a failed filter request, alerting unless the backend answered with a status.
    pub fn report_filter_failure(&self, e: &ServiceError) {
        error!("Error fetching filtered doctors: {}", e);
        if !matches!(e, ServiceError::Status { .. }) {
            self.notifier.alert(FILTER_FAILED_ALERT);
        }
    }
}

fn settle(
    result: Result<(StatusCode, MessageBody), ServiceError>,
    success_message: &str,
    failure_message: &str,
) -> ActionResult {
    match result {
        Ok((status, body)) => {
            let fallback = if status.is_success() { success_message } else { failure_message };
            let message = body.text().unwrap_or(fallback).to_string();
            if status.is_success() {
                ActionResult::ok(message)
            } else {
                error!("Doctor request rejected ({}): {}", status, message);
                ActionResult::failed(message)
            }
        }
        Err(e) => {
            error!("{}: {}", failure_message, e);
            ActionResult::failed(failure_message)
        }
    }
}
