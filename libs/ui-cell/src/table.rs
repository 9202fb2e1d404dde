use crate::markup::escape;
use crate::patient_row::PatientRow;

/// Columns of the doctor's appointment table; placeholder rows span all of them.
pub const APPOINTMENT_COLUMNS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum TableRow {
    Patient(PatientRow),
    Placeholder { text: String, colspan: usize },
}

impl TableRow {
    pub fn to_html(&self) -> String {
        match self {
            TableRow::Patient(row) => row.to_html(),
            TableRow::Placeholder { text, colspan } => {
                format!("<tr><td colspan=\"{}\">{}</td></tr>", colspan, escape(text))
            }
        }
    }
}

/// Full contents of a `<tbody>`. Always rebuilt from scratch, never patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableBody {
    rows: Vec<TableRow>,
}

impl TableBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder(text: impl Into<String>) -> Self {
        Self {
            rows: vec![TableRow::Placeholder { text: text.into(), colspan: APPOINTMENT_COLUMNS }],
        }
    }

    pub fn push(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn data_row_count(&self) -> usize {
        self.rows.iter().filter(|r| matches!(r, TableRow::Patient(_))).count()
    }

    pub fn placeholder_count(&self) -> usize {
        self.rows.len() - self.data_row_count()
    }

    pub fn placeholder_text(&self) -> Option<&str> {
        self.rows.iter().find_map(|r| match r {
            TableRow::Placeholder { text, .. } => Some(text.as_str()),
            TableRow::Patient(_) => None,
        })
    }

    pub fn to_html(&self) -> String {
        self.rows.iter().map(TableRow::to_html).collect()
    }
}

impl FromIterator<PatientRow> for TableBody {
    fn from_iter<I: IntoIterator<Item = PatientRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().map(TableRow::Patient).collect(),
        }
    }
}
