pub mod paths;
pub mod services;

pub use paths::*;
pub use services::*;
