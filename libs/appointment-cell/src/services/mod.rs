pub mod prescription;
pub mod records;

pub use prescription::PrescriptionService;
pub use records::AppointmentRecordService;
