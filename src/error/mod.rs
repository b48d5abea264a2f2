//! Error types for the submission workflow.
//!
//! - [`CapabilityError`] — Geolocation acquisition failures.
//! - [`SubmitError`] — Persistence collaborator failures.
//! - [`WizardError`] — Top-level errors for wizard operations.

pub mod capability_error;
pub mod submit_error;
pub mod wizard_error;

pub use capability_error::CapabilityError;
pub use submit_error::SubmitError;
pub use wizard_error::WizardError;

/// Convenience alias for wizard-level results.
pub type WizardResult<T> = Result<T, WizardError>;
