pub mod doctor;

pub use doctor::{DoctorService, FILTER_FAILED_ALERT};
