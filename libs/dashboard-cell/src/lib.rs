pub mod doctor_dashboard;
pub mod page;
pub mod patient_dashboard;

pub use doctor_dashboard::{DoctorDashboard, DoctorDashboardState};
pub use page::{LoadOutcome, Page};
pub use patient_dashboard::{DoctorFilterInput, PatientDashboard};
