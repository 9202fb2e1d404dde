use std::io::{self, Write};

use chrono::NaiveDate;
use tracing::info;

use dashboard_cell::Page;
use shared_utils::Notifier;
use ui_cell::{modal_body, DoctorContent, ModalKind, TableBody};

/// Writes every page mutation to stdout as the HTML fragment it would produce.
#[derive(Debug, Default)]
pub struct ConsolePage;

impl ConsolePage {
    fn emit(&self, section: &str, body: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "<!-- {} -->\n{}", section, body);
    }
}

impl Notifier for ConsolePage {
    fn alert(&self, message: &str) {
        eprintln!("[alert] {}", message);
    }
}

impl Page for ConsolePage {
    fn set_table_body(&self, body: &TableBody) {
        self.emit("patientTableBody", &body.to_html());
    }

    fn set_content(&self, content: &DoctorContent) {
        self.emit("content", &content.to_html());
    }

    fn set_date_picker(&self, date: NaiveDate) {
        info!("datePicker = {}", date);
    }

    fn open_modal(&self, kind: ModalKind) {
        self.emit(kind.id(), &modal_body(kind));
    }

    fn close_modal(&self) {
        info!("modal closed");
    }

    fn reload(&self) {
        info!("page reload requested");
    }

    fn navigate(&self, path: &str) {
        println!("navigate: {}", path);
    }
}
