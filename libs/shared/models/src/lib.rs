pub mod auth;
pub mod clinic;
pub mod error;
pub mod responses;

pub use auth::*;
pub use clinic::*;
pub use error::ServiceError;
pub use responses::*;
