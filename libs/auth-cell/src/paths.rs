use shared_api::segment;
use shared_models::UserRole;

pub const LOGGED_PATIENT_DASHBOARD: &str = "/pages/loggedPatientDashboard.html";
pub const PATIENT_DASHBOARD: &str = "/pages/patientDashboard.html";

/// Page a freshly logged-in user is sent to. Admin and doctor dashboards are
/// token-gated server routes; the patient pages are static.
pub fn dashboard_path(role: UserRole, token: &str) -> String {
    match role {
        UserRole::Admin => format!("/adminDashboard/{}", segment(token)),
        UserRole::Doctor => format!("/doctorDashboard/{}", segment(token)),
        UserRole::LoggedPatient => LOGGED_PATIENT_DASHBOARD.to_string(),
        UserRole::Patient => PATIENT_DASHBOARD.to_string(),
    }
}
