use shared_models::Doctor;

use crate::markup::escape;

#[derive(Debug, Clone, PartialEq)]
pub struct DoctorCard {
    pub id: Option<i64>,
    pub name: String,
    pub specialty: String,
    pub email: String,
    pub available_times: Vec<String>,
}

impl DoctorCard {
    pub fn new(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name.clone(),
            specialty: doctor.specialty.clone(),
            email: doctor.email.clone(),
            available_times: doctor.available_times.clone(),
        }
    }

    pub fn to_html(&self) -> String {
        let availability = if self.available_times.is_empty() {
            "Not available".to_string()
        } else {
            self.available_times.join(", ")
        };
        let id = self.id.map(|id| id.to_string()).unwrap_or_default();

        format!(
            concat!(
                "<div class=\"doctor-card\" data-doctor-id=\"{id}\">",
                "<div class=\"doctor-info\">",
                "<h3>{name}</h3>",
                "<p>Specialty: {specialty}</p>",
                "<p>Email: {email}</p>",
                "<p>Availability: {availability}</p>",
                "</div>",
                "<div class=\"card-actions\">",
                "<button class=\"book-btn\" data-doctor-id=\"{id}\">Book Now</button>",
                "</div>",
                "</div>"
            ),
            id = id,
            name = escape(&self.name),
            specialty = escape(&self.specialty),
            email = escape(&self.email),
            availability = escape(&availability),
        )
    }
}

/// What the `#content` container of the patient dashboard shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DoctorContent {
    Cards(Vec<DoctorCard>),
    Notice(String),
}

impl DoctorContent {
    pub fn from_doctors(doctors: &[Doctor]) -> Self {
        DoctorContent::Cards(doctors.iter().map(DoctorCard::new).collect())
    }

    pub fn card_count(&self) -> usize {
        match self {
            DoctorContent::Cards(cards) => cards.len(),
            DoctorContent::Notice(_) => 0,
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            DoctorContent::Cards(cards) => cards.iter().map(DoctorCard::to_html).collect(),
            DoctorContent::Notice(text) => format!("<p>{}</p>", escape(text)),
        }
    }
}
