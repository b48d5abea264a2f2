//! Protocol-stable model types shared across layers.

mod classification;
mod draft;
mod session;

pub use classification::{IssueCategory, IssuePriority};
pub use draft::{AttachmentRef, DraftField, FieldEdit, IssueDraft};
pub use session::{AuthEvent, Session, SessionState};
