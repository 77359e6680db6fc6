//! Simulated enrollment. Lives only as long as the process and is keyed by the session cookie.

mod store;
pub use store::{DEFAULT_SESSION_TTL, SessionStore};

pub type SessionId = uuid::Uuid;

pub fn new_session_id() -> SessionId {
    uuid::Uuid::new_v4()
}
