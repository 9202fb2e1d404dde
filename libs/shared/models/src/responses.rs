use serde::{Deserialize, Serialize};

use crate::clinic::{Appointment, Doctor, Patient, Prescription};

/// Settled outcome of a mutating call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
}

impl ActionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorList {
    #[serde(default)]
    pub doctors: Vec<Doctor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentList {
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageBody {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl MessageBody {
    pub fn text(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientEnvelope {
    pub patient: Option<Patient>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrescriptionEnvelope {
    pub prescription: Option<Prescription>,
}
