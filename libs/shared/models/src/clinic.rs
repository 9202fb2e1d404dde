use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Reads an explicit JSON `null` as the field's default, same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ==============================================================================
// APPOINTMENTS
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Appointment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub patient_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub patient_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub patient_phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub patient_email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub doctor_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Calendar date of the appointment when the backend sent an ISO date or datetime.
    pub fn date_naive(&self) -> Option<NaiveDate> {
        let day = self.date.get(..10).unwrap_or(&self.date);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

/// Accepts either the label form (`"pending"`) or the backend's numeric code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StatusRepr", into = "String")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Consulted,
    Cancelled,
    Other(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StatusRepr {
    Code(i64),
    Label(String),
}

impl From<StatusRepr> for AppointmentStatus {
    fn from(repr: StatusRepr) -> Self {
        match repr {
            StatusRepr::Code(0) => AppointmentStatus::Pending,
            StatusRepr::Code(1) => AppointmentStatus::Consulted,
            StatusRepr::Code(2) => AppointmentStatus::Cancelled,
            StatusRepr::Code(other) => AppointmentStatus::Other(other.to_string()),
            StatusRepr::Label(label) => match label.to_ascii_lowercase().as_str() {
                "pending" => AppointmentStatus::Pending,
                "consulted" => AppointmentStatus::Consulted,
                "cancelled" | "canceled" => AppointmentStatus::Cancelled,
                _ => AppointmentStatus::Other(label),
            },
        }
    }
}

impl From<AppointmentStatus> for String {
    fn from(status: AppointmentStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Consulted => write!(f, "consulted"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::Other(label) => write!(f, "{}", label),
        }
    }
}

// ==============================================================================
// PEOPLE
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Doctor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub specialty: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub available_times: Vec<String>,
    // Only sent when an admin creates the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Patient {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
}

impl Patient {
    /// The patient half of an appointment record, as shown on a doctor's table row.
    pub fn from_appointment(appointment: &Appointment) -> Self {
        Self {
            id: appointment.patient_id,
            name: appointment.patient_name.clone(),
            email: appointment.patient_email.clone(),
            phone: appointment.patient_phone.clone(),
            address: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Prescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub patient_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub appointment_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub medication: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dosage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_notes: Option<String>,
}
