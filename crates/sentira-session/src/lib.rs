//! sentira-session
//!
//! Per-respondent answer collection. One `CollectionSession` drives a single
//! respondent through a questionnaire's items in order, accumulates typed
//! answer drafts, and freezes them into an immutable answer list at submit.
//! Sessions are independently owned; nothing is shared across respondents.

pub mod error;
pub mod session;

pub use error::SessionError;
pub use session::{CollectionSession, SessionState};
