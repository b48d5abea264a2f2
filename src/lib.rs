//! # civicflow — citizen issue-submission workflow core
//!
//! `civicflow` is the core of a citizen-facing portal for reporting local
//! civic issues (potholes, lighting, sanitation, …). It implements:
//!
//! - **Wizard state machine**: a three-step submission wizard over a
//!   structured [`IssueDraft`], with per-step validity gating, unconditional
//!   backward navigation, and reset-on-success semantics.
//! - **Draft validation**: pure, keystroke-cheap per-step predicates over
//!   the draft.
//! - **Attachment staging**: a single pending evidence file reference,
//!   held without upload until submission or explicit clear.
//! - **Location acquisition**: the device geolocation capability wrapped
//!   with a hard deadline, cached-fix freshness policy, and a closed error
//!   taxonomy; late fixes are dropped with the timed-out future.
//! - **Submission dispatch**: one call per user-initiated submit to the
//!   external persistence collaborator, no retries, draft retained on
//!   failure.
//! - **Session gate**: a process-wide, asynchronously initialized cache of
//!   the identity collaborator's authentication state, applied last-wins
//!   from a push stream and observable through a watch channel.
//!
//! Rendering, routing, and the collaborator implementations are out of
//! scope: the crate exposes traits at those seams and publishes state
//! changes on an event channel the host subscribes to.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use civicflow::{
//!     FieldEdit, IssueAck, IssueCategory, IssuePriority, IssueReport, IssueStore,
//!     ReportWizard, SubmitError,
//! };
//!
//! struct Backend;
//!
//! #[async_trait::async_trait]
//! impl IssueStore for Backend {
//!     async fn create_issue(&self, _report: IssueReport) -> Result<IssueAck, SubmitError> {
//!         Ok(IssueAck {
//!             issue_id: "ISS-1".into(),
//!             received_at: chrono::Utc::now(),
//!         })
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let (mut wizard, _events) = ReportWizard::new(Arc::new(Backend));
//!     wizard.update(FieldEdit::Title("Broken streetlight on MG Road".into()));
//!     wizard.update(FieldEdit::Description("Pole 12 is dark after sunset".into()));
//!     assert!(wizard.advance());
//!     wizard.update(FieldEdit::Location("MG Road, near pole 12".into()));
//!     wizard.update(FieldEdit::Category(IssueCategory::Streetlight));
//!     assert!(wizard.advance());
//!     wizard.update(FieldEdit::Priority(IssuePriority::High));
//!     let ack = wizard.submit().await.unwrap();
//!     println!("submitted: {}", ack.issue_id);
//! }
//! ```

pub mod core;
pub mod domain;
pub mod error;
pub mod location;
pub mod session;
pub mod submit;

pub use crate::core::event_bus::{create_event_channel, EventReceiver, EventSender, WizardEvent};
pub use crate::core::stager::AttachmentStager;
pub use crate::core::state::{Step, WizardState};
pub use crate::core::validation::{first_incomplete_step, is_step_valid, missing_fields};
pub use crate::core::wizard::ReportWizard;
pub use crate::domain::model::{
    AttachmentRef, AuthEvent, DraftField, FieldEdit, IssueCategory, IssueDraft, IssuePriority,
    Session, SessionState,
};
pub use crate::error::{CapabilityError, SubmitError, WizardError, WizardResult};
pub use crate::location::{
    AcquireOptions, GeolocationCapability, LocationAcquirer, PositionErrorCode, PositionFix,
    DEFAULT_MAX_CACHE_AGE_MS, DEFAULT_TIMEOUT_MS,
};
pub use crate::session::{IdentityCollaborator, SessionGate};
pub use crate::submit::{IssueAck, IssueReport, IssueStore, SubmissionDispatcher};
