use chrono::NaiveDate;
use reqwest::Method;
use tracing::debug;

use shared_api::{segment, segment_or_null, ApiClient};
use shared_config::PortalConfig;
use shared_models::{Appointment, AppointmentList, ServiceError};

use crate::DATE_FORMAT;

const APPOINTMENT_API: &str = "/appointments";

/// Day listing of a doctor's appointments.
pub struct AppointmentRecordService {
    api: ApiClient,
}

impl AppointmentRecordService {
    pub fn new(config: &PortalConfig) -> Self {
        Self::with_client(ApiClient::new(config))
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    /// Appointments on `date` for the doctor owning `token`, optionally narrowed to a patient name.
    /// Errors are returned as-is; the dashboard renders them as its error state.
    pub async fn get_all_appointments(
        &self,
        date: NaiveDate,
        patient_name: Option<&str>,
        token: &str,
    ) -> Result<Vec<Appointment>, ServiceError> {
        let path = format!(
            "{}/{}/{}/{}",
            APPOINTMENT_API,
            date.format(DATE_FORMAT),
            segment_or_null(patient_name),
            segment(token),
        );
        debug!("Fetching appointments for {}", date);

        let list: AppointmentList = self.api.request(Method::GET, &path, None).await?;
        Ok(list.appointments)
    }
}
