//! Render helpers: pure functions from clinic records to HTML fragments.

pub mod doctor_card;
pub mod markup;
pub mod modal;
pub mod patient_row;
pub mod table;

pub use doctor_card::{DoctorCard, DoctorContent};
pub use modal::{modal_body, ModalKind};
pub use patient_row::PatientRow;
pub use table::{TableBody, TableRow, APPOINTMENT_COLUMNS};
