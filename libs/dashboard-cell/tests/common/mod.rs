#![allow(dead_code)]

use std::sync::Mutex;

use chrono::NaiveDate;

use dashboard_cell::Page;
use shared_utils::Notifier;
use ui_cell::{DoctorContent, ModalKind, TableBody};

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Alert(String),
    Table(TableBody),
    Content(DoctorContent),
    DatePicker(NaiveDate),
    OpenModal(ModalKind),
    CloseModal,
    Reload,
    Navigate(String),
}

/// Page double that records every mutation in order.
#[derive(Debug, Default)]
pub struct RecordingPage {
    events: Mutex<Vec<PageEvent>>,
}

impl RecordingPage {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, event: PageEvent) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<PageEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                PageEvent::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn tables(&self) -> Vec<TableBody> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                PageEvent::Table(body) => Some(body),
                _ => None,
            })
            .collect()
    }

    pub fn last_table(&self) -> Option<TableBody> {
        self.tables().pop()
    }

    pub fn contents(&self) -> Vec<DoctorContent> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                PageEvent::Content(content) => Some(content),
                _ => None,
            })
            .collect()
    }

    pub fn last_content(&self) -> Option<DoctorContent> {
        self.contents().pop()
    }
}

impl Notifier for RecordingPage {
    fn alert(&self, message: &str) {
        self.record(PageEvent::Alert(message.to_string()));
    }
}

impl Page for RecordingPage {
    fn set_table_body(&self, body: &TableBody) {
        self.record(PageEvent::Table(body.clone()));
    }

    fn set_content(&self, content: &DoctorContent) {
        self.record(PageEvent::Content(content.clone()));
    }

    fn set_date_picker(&self, date: NaiveDate) {
        self.record(PageEvent::DatePicker(date));
    }

    fn open_modal(&self, kind: ModalKind) {
        self.record(PageEvent::OpenModal(kind));
    }

    fn close_modal(&self) {
        self.record(PageEvent::CloseModal);
    }

    fn reload(&self) {
        self.record(PageEvent::Reload);
    }

    fn navigate(&self, path: &str) {
        self.record(PageEvent::Navigate(path.to_string()));
    }
}
