pub mod services;

pub use services::*;

/// Wire format for appointment dates in listing paths.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
