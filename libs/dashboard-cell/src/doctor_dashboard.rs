use std::sync::{Arc, RwLock};

use chrono::{NaiveDate, Utc};
use tracing::{debug, error};

use appointment_cell::AppointmentRecordService;
use shared_api::NULL_SEGMENT;
use shared_models::{Appointment, ServiceError};
use shared_utils::{RequestSequence, SessionStore};
use ui_cell::{PatientRow, TableBody};

use crate::page::{LoadOutcome, Page};

pub const NO_APPOINTMENTS_TEXT: &str = "No Appointments found for today.";
pub const LOAD_ERROR_TEXT: &str = "Error loading appointments. Try again later.";

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Inputs of the doctor's appointment listing.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorDashboardState {
    pub selected_date: NaiveDate,
    pub patient_name: Option<String>,
    pub token: Option<String>,
}

impl DoctorDashboardState {
    pub fn new(token: Option<String>) -> Self {
        Self {
            selected_date: today(),
            patient_name: None,
            token,
        }
    }
}

/// Fetch stage: the listing for the given state, errors kept.
pub async fn fetch_appointments(
    records: &AppointmentRecordService,
    state: &DoctorDashboardState,
) -> Result<Vec<Appointment>, ServiceError> {
    records
        .get_all_appointments(
            state.selected_date,
            state.patient_name.as_deref(),
            state.token.as_deref().unwrap_or(NULL_SEGMENT),
        )
        .await
}

/// Render stage: exactly one of data rows, the empty placeholder, or the error placeholder.
pub fn render_appointments(result: &Result<Vec<Appointment>, ServiceError>) -> TableBody {
    match result {
        Ok(appointments) if appointments.is_empty() => TableBody::placeholder(NO_APPOINTMENTS_TEXT),
        Ok(appointments) => appointments.iter().map(PatientRow::new).collect(),
        Err(_) => TableBody::placeholder(LOAD_ERROR_TEXT),
    }
}

pub struct DoctorDashboard {
    records: AppointmentRecordService,
    page: Arc<dyn Page>,
    state: RwLock<DoctorDashboardState>,
    sequence: RequestSequence,
}

impl DoctorDashboard {
    /// The session token is read once, here.
    pub fn new(records: AppointmentRecordService, page: Arc<dyn Page>, store: &dyn SessionStore) -> Self {
        Self {
            records,
            page,
            state: RwLock::new(DoctorDashboardState::new(store.token())),
            sequence: RequestSequence::new(),
        }
    }

    pub fn state(&self) -> DoctorDashboardState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn update(&self, apply: impl FnOnce(&mut DoctorDashboardState)) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        apply(&mut state);
    }

    pub async fn on_search_input(&self, value: &str) -> LoadOutcome {
        let trimmed = value.trim();
        self.update(|state| {
            state.patient_name = if trimmed.is_empty() { None } else { Some(trimmed.to_string()) };
        });
        self.load_appointments().await
    }

    pub async fn on_today(&self) -> LoadOutcome {
        let date = today();
        self.update(|state| state.selected_date = date);
        self.page.set_date_picker(date);
        self.load_appointments().await
    }

    pub async fn on_date_change(&self, date: NaiveDate) -> LoadOutcome {
        self.update(|state| state.selected_date = date);
        self.load_appointments().await
    }

    pub async fn load_appointments(&self) -> LoadOutcome {
        let ticket = self.sequence.issue();
        let state = self.state();
        debug!(
            "Loading appointments for {} (request {})",
            state.selected_date,
            ticket.value()
        );

        let result = fetch_appointments(&self.records, &state).await;

        if !self.sequence.is_current(ticket) {
            debug!("Dropping stale appointment response (request {})", ticket.value());
            return LoadOutcome::Superseded;
        }

        let outcome = match &result {
            Ok(appointments) if appointments.is_empty() => LoadOutcome::Empty,
            Ok(appointments) => LoadOutcome::Rendered(appointments.len()),
            Err(e) => {
                error!("Error loading appointments: {}", e);
                LoadOutcome::Error
            }
        };

        self.page.set_table_body(&render_appointments(&result));
        outcome
    }
}
