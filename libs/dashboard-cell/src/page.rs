use chrono::NaiveDate;

use shared_utils::Notifier;
use ui_cell::{DoctorContent, ModalKind, TableBody};

/// The document a dashboard controller drives. Implementations own the actual
/// DOM (or terminal, or test recorder); controllers only hand them finished fragments.
pub trait Page: Notifier {
    /// Replaces the whole appointment table body.
    fn set_table_body(&self, body: &TableBody);

    /// Replaces the whole doctor card container.
    fn set_content(&self, content: &DoctorContent);

    fn set_date_picker(&self, date: NaiveDate);

    fn open_modal(&self, kind: ModalKind);

    fn close_modal(&self);

    fn reload(&self);

    fn navigate(&self, path: &str);
}

/// Where a load ended up: `idle → loading → {rendered | empty | error}`, or dropped
/// because a newer request was issued while it was in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered(usize),
    Empty,
    Error,
    Superseded,
}
