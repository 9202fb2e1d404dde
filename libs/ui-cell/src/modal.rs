#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    PatientSignup,
    PatientLogin,
}

impl ModalKind {
    pub fn id(&self) -> &'static str {
        match self {
            ModalKind::PatientSignup => "patientSignup",
            ModalKind::PatientLogin => "patientLogin",
        }
    }
}

fn field(id: &str, kind: &str, placeholder: &str) -> String {
    format!(
        "<input type=\"{}\" id=\"{}\" placeholder=\"{}\" class=\"input-field\" />",
        kind, id, placeholder
    )
}

fn form(title: &str, fields: &[String], action: &str, label: &str) -> String {
    format!(
        "<h2>{}</h2>{}<button class=\"dashboard-btn\" onclick=\"{}()\">{}</button>",
        title,
        fields.concat(),
        action,
        label
    )
}

/// Inner markup of the shared `#modal` dialog. Field ids are what the form handlers read.
pub fn modal_body(kind: ModalKind) -> String {
    match kind {
        ModalKind::PatientSignup => form(
            "Patient Signup",
            &[
                field("name", "text", "Name"),
                field("email", "email", "Email"),
                field("password", "password", "Password"),
                field("phone", "text", "Phone"),
                field("address", "text", "Address"),
            ],
            "signupPatient",
            "Signup",
        ),
        ModalKind::PatientLogin => form(
            "Patient Login",
            &[field("email", "email", "Email"), field("password", "password", "Password")],
            "loginPatient",
            "Login",
        ),
    }
}
