use shared_models::{Appointment, Patient};

use crate::markup::escape;

const PRESCRIPTION_PAGE: &str = "/pages/addPrescription.html";

/// One row of the doctor's appointment table.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientRow {
    pub appointment_id: i64,
    pub patient: Patient,
}

impl PatientRow {
    pub fn new(appointment: &Appointment) -> Self {
        Self {
            appointment_id: appointment.id,
            patient: Patient::from_appointment(appointment),
        }
    }

    pub fn prescription_link(&self) -> String {
        format!(
            "{}?appointmentId={}&patientName={}",
            PRESCRIPTION_PAGE,
            self.appointment_id,
            urlencoding::encode(&self.patient.name)
        )
    }

    pub fn to_html(&self) -> String {
        format!(
            concat!(
                "<tr>",
                "<td class=\"patient-id\">{id}</td>",
                "<td>{name}</td>",
                "<td>{phone}</td>",
                "<td>{email}</td>",
                "<td><a class=\"prescription-btn\" href=\"{link}\">Add Prescription</a></td>",
                "</tr>"
            ),
            id = self.patient.id,
            name = escape(&self.patient.name),
            phone = escape(&self.patient.phone),
            email = escape(&self.patient.email),
            link = escape(&self.prescription_link()),
        )
    }
}
