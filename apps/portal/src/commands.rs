use std::sync::Arc;

use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;

use appointment_cell::{AppointmentRecordService, PrescriptionService, DATE_FORMAT};
use auth_cell::{dashboard_path, AdminService};
use dashboard_cell::{DoctorDashboard, DoctorFilterInput, LoadOutcome, Page, PatientDashboard};
use shared_config::PortalConfig;
use shared_models::{AdminLoginRequest, LoginRequest, SignupRequest, UserRole};
use shared_utils::{SessionStore, TOKEN_KEY};

#[derive(Parser, Debug)]
#[command(name = "clinic-portal")]
#[command(about = "Clinic scheduling portal: renders dashboard fragments against the clinic backend")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Doctor cards, optionally filtered
    Doctors {
        name: Option<String>,
        time: Option<String>,
        specialty: Option<String>,
    },
    /// Doctor's appointment table (defaults to today)
    Appointments {
        /// Date as YYYY-MM-DD
        #[arg(value_parser = parse_date)]
        date: Option<NaiveDate>,
        patient: Option<String>,
    },
    /// Register a new patient
    Signup {
        name: String,
        email: String,
        password: String,
        phone: String,
        address: String,
    },
    /// Patient login; stores the session token
    Login { email: String, password: String },
    /// Admin login; stores the session token
    AdminLogin { username: String, password: String },
    /// Prescription for an appointment, using the stored token
    Prescription { appointment_id: i64 },
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| format!("invalid date {:?}, expected YYYY-MM-DD: {}", raw, e))
}

pub async fn run(
    command: Command,
    config: &PortalConfig,
    page: Arc<dyn Page>,
    store: Arc<dyn SessionStore>,
) -> Result<()> {
    match command {
        Command::Doctors { name, time, specialty } => {
            let input = DoctorFilterInput {
                name: name.unwrap_or_default(),
                time: time.unwrap_or_default(),
                specialty: specialty.unwrap_or_default(),
            };
            let dashboard = PatientDashboard::new(config, page, store);
            let outcome = if input.to_filter().is_unfiltered() {
                dashboard.on_load().await
            } else {
                dashboard.on_filter_change(&input).await
            };
            report(outcome)
        }
        Command::Appointments { date, patient } => {
            let dashboard = DoctorDashboard::new(AppointmentRecordService::new(config), page, store.as_ref());
            if let Some(date) = date {
                dashboard.on_date_change(date).await;
            }
            let outcome = match patient {
                Some(name) => dashboard.on_search_input(&name).await,
                None if date.is_none() => dashboard.on_today().await,
                None => dashboard.load_appointments().await,
            };
            report(outcome)
        }
        Command::Signup { name, email, password, phone, address } => {
            let data = SignupRequest { name, email, password, phone, address };
            let dashboard = PatientDashboard::new(config, page, store);
            let result = dashboard.signup_patient(&data).await;
            if result.success {
                Ok(())
            } else {
                bail!("signup failed: {}", result.message)
            }
        }
        Command::Login { email, password } => {
            let data = LoginRequest { email, password };
            let dashboard = PatientDashboard::new(config, page, store);
            if dashboard.login_patient(&data).await {
                Ok(())
            } else {
                bail!("login failed")
            }
        }
        Command::AdminLogin { username, password } => {
            let data = AdminLoginRequest { username, password };
            let response = AdminService::new(config)
                .admin_login(&data)
                .await
                .ok_or_else(|| anyhow!("backend unreachable at {}", config.api_base_url))?;
            if !response.ok() {
                page.alert("Invalid credentials!");
                bail!("admin login rejected ({})", response.status());
            }
            let token = response.token().await?;
            store.set_token(&token)?;
            if let Err(e) = store.set_role(UserRole::Admin.as_str()) {
                store.remove_item(TOKEN_KEY)?;
                return Err(e.into());
            }
            page.navigate(&dashboard_path(UserRole::Admin, &token));
            Ok(())
        }
        Command::Prescription { appointment_id } => {
            let token = store
                .token()
                .ok_or_else(|| anyhow!("no session token stored; log in first"))?;
            match PrescriptionService::new(config).get_prescription(appointment_id, &token).await {
                Some(prescription) => {
                    println!(
                        "{}: {} {}{}",
                        prescription.patient_name,
                        prescription.medication,
                        prescription.dosage,
                        prescription
                            .doctor_notes
                            .map(|notes| format!(" ({})", notes))
                            .unwrap_or_default()
                    );
                    Ok(())
                }
                None => bail!("no prescription found for appointment {}", appointment_id),
            }
        }
    }
}

fn report(outcome: LoadOutcome) -> Result<()> {
    info!("load finished: {:?}", outcome);
    match outcome {
        LoadOutcome::Error => bail!("request failed; see log for details"),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_utils::MemorySessionStore;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::console::ConsolePage;

    fn parse(values: &[&str]) -> Result<Command, clap::Error> {
        Cli::try_parse_from(std::iter::once("clinic-portal").chain(values.iter().copied()))
            .map(|cli| cli.command)
    }

    #[test]
    fn test_parse_doctors_with_partial_filters() {
        let command = parse(&["doctors", "Grey"]).unwrap();
        assert_eq!(
            command,
            Command::Doctors { name: Some("Grey".into()), time: None, specialty: None }
        );
    }

    #[test]
    fn test_parse_appointments() {
        let command = parse(&["appointments", "2025-03-14", "Jo"]).unwrap();
        assert_eq!(
            command,
            Command::Appointments {
                date: NaiveDate::from_ymd_opt(2025, 3, 14),
                patient: Some("Jo".into()),
            }
        );
        assert!(parse(&["appointments", "14/03/2025"]).is_err());
    }

    #[test]
    fn test_parse_rejects_missing_arguments() {
        assert!(parse(&["login", "jo@x.com"]).is_err());
        assert!(parse(&["prescription", "seven"]).is_err());
        assert!(parse(&["bogus"]).is_err());
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_admin_login_subcommand_name() {
        let command = parse(&["admin-login", "admin", "secret"]).unwrap();
        assert_eq!(
            command,
            Command::AdminLogin { username: "admin".into(), password: "secret".into() }
        );
    }

    #[tokio::test]
    async fn test_run_admin_login_stores_session() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/admin/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "token": "admin-token" })))
            .mount(&mock_server)
            .await;

        let config = PortalConfig::new(mock_server.uri());
        let store = Arc::new(MemorySessionStore::new());
        let command = parse(&["admin-login", "admin", "secret"]).unwrap();

        run(command, &config, Arc::new(ConsolePage), store.clone()).await.unwrap();

        assert_eq!(store.token().as_deref(), Some("admin-token"));
        assert_eq!(store.role().as_deref(), Some("admin"));
    }

    #[tokio::test]
    async fn test_run_prescription_requires_token() {
        let config = PortalConfig::new("http://127.0.0.1:9");
        let command = Command::Prescription { appointment_id: 1 };

        let result = run(command, &config, Arc::new(ConsolePage), Arc::new(MemorySessionStore::new())).await;
        assert!(result.is_err());
    }
}
