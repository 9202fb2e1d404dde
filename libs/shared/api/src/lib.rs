pub mod client;
pub mod login;

pub use client::{segment, segment_or_null, ApiClient, NULL_SEGMENT};
pub use login::LoginResponse;
