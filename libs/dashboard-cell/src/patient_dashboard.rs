use std::sync::Arc;

use tracing::{debug, error};

use auth_cell::dashboard_path;
use doctor_cell::{DoctorFilter, DoctorService};
use patient_cell::PatientService;
use shared_config::PortalConfig;
use shared_models::{ActionResult, LoginRequest, SignupRequest, UserRole};
use shared_utils::{Notifier, RequestSequence, SessionStore, TOKEN_KEY};
use ui_cell::{DoctorContent, ModalKind};

use crate::page::{LoadOutcome, Page};

pub const NO_DOCTORS_TEXT: &str = "No doctors found with the given filters.";
pub const INVALID_CREDENTIALS_ALERT: &str = "Invalid credentials!";
pub const LOGIN_FAILED_ALERT: &str = "Failed to Login.";

/// Raw values of the three filter controls above the doctor cards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorFilterInput {
    pub name: String,
    pub time: String,
    pub specialty: String,
}

impl DoctorFilterInput {
    pub fn to_filter(&self) -> DoctorFilter {
        DoctorFilter::from_inputs(&self.name, &self.time, &self.specialty)
    }
}

struct PageNotifier(Arc<dyn Page>);

impl Notifier for PageNotifier {
    fn alert(&self, message: &str) {
        self.0.alert(message);
    }
}

pub struct PatientDashboard {
    doctors: DoctorService,
    patients: PatientService,
    page: Arc<dyn Page>,
    store: Arc<dyn SessionStore>,
    sequence: RequestSequence,
}

impl PatientDashboard {
    pub fn new(config: &PortalConfig, page: Arc<dyn Page>, store: Arc<dyn SessionStore>) -> Self {
        Self::with_services(DoctorService::new(config), PatientService::new(config), page, store)
    }

    /// Alerts raised by either service are routed to `page`.
    pub fn with_services(
        doctors: DoctorService,
        patients: PatientService,
        page: Arc<dyn Page>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        let notifier: Arc<dyn Notifier> = Arc::new(PageNotifier(page.clone()));
        let doctors = doctors.with_notifier(notifier.clone());
        let patients = patients.with_notifier(notifier);
        Self {
            doctors,
            patients,
            page,
            store,
            sequence: RequestSequence::new(),
        }
    }

    pub fn patients(&self) -> &PatientService {
        &self.patients
    }

    pub async fn on_load(&self) -> LoadOutcome {
        let ticket = self.sequence.issue();
        let result = self.doctors.try_get_doctors().await;

        if !self.sequence.is_current(ticket) {
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(doctors) => {
                self.page.set_content(&DoctorContent::from_doctors(&doctors));
                if doctors.is_empty() {
                    LoadOutcome::Empty
                } else {
                    LoadOutcome::Rendered(doctors.len())
                }
            }
            Err(e) => {
                error!("Failed to load doctors: {}", e);
                self.page.set_content(&DoctorContent::Cards(Vec::new()));
                LoadOutcome::Error
            }
        }
    }

    pub async fn on_filter_change(&self, input: &DoctorFilterInput) -> LoadOutcome {
        let ticket = self.sequence.issue();
        let filter = input.to_filter();
        debug!("Filtering doctors (request {}): {:?}", ticket.value(), filter);

        let result = self.doctors.try_filter_doctors(&filter).await;

        if !self.sequence.is_current(ticket) {
            debug!("Dropping stale doctor filter response (request {})", ticket.value());
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(list) if !list.doctors.is_empty() => {
                self.page.set_content(&DoctorContent::from_doctors(&list.doctors));
                LoadOutcome::Rendered(list.doctors.len())
            }
            Ok(_) => {
                self.page.set_content(&DoctorContent::Notice(NO_DOCTORS_TEXT.to_string()));
                LoadOutcome::Empty
            }
            Err(e) => {
                self.doctors.report_filter_failure(&e);
                self.page.set_content(&DoctorContent::Notice(NO_DOCTORS_TEXT.to_string()));
                LoadOutcome::Error
            }
        }
    }

    pub fn open_signup_modal(&self) {
        self.page.open_modal(ModalKind::PatientSignup);
    }

    pub fn open_login_modal(&self) {
        self.page.open_modal(ModalKind::PatientLogin);
    }

    /// Signup form handler. On success the modal closes and the page reloads.
    pub async fn signup_patient(&self, data: &SignupRequest) -> ActionResult {
        let result = self.patients.patient_signup(data).await;

        self.page.alert(&result.message);
        if result.success {
            self.page.close_modal();
            self.page.reload();
        }

        result
    }

    /// Login form handler. Returns whether the patient ended up logged in.
    pub async fn login_patient(&self, data: &LoginRequest) -> bool {
        let Some(response) = self.patients.patient_login(data).await else {
            self.page.alert(LOGIN_FAILED_ALERT);
            return false;
        };

        if !response.ok() {
            debug!("Login rejected with status {}", response.status());
            self.page.alert(INVALID_CREDENTIALS_ALERT);
            return false;
        }

        let token = match response.token().await {
            Ok(token) => token,
            Err(e) => {
                error!("Login failed: {}", e);
                self.page.alert(LOGIN_FAILED_ALERT);
                return false;
            }
        };

        let stored = self
            .store
            .set_token(&token)
            .and_then(|_| self.store.set_role(UserRole::LoggedPatient.as_str()));
        if let Err(e) = stored {
            error!("Login failed: {}", e);
            // A token without its role must not outlive a failed login.
            if let Err(e) = self.store.remove_item(TOKEN_KEY) {
                error!("Failed to clear session token: {}", e);
            }
            self.page.alert(LOGIN_FAILED_ALERT);
            return false;
        }

        self.page.navigate(&dashboard_path(UserRole::LoggedPatient, &token));
        true
    }
}
