pub mod notify;
pub mod sequence;
pub mod session;
pub mod test_utils;

pub use notify::{LogNotifier, Notifier};
pub use sequence::{RequestSequence, Ticket};
pub use session::{FileSessionStore, MemorySessionStore, SessionError, SessionStore, ROLE_KEY, TOKEN_KEY};
