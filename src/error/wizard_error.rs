//! Wizard-level error types.

use thiserror::Error;

use super::SubmitError;
use crate::core::state::Step;

/// Errors returned by wizard operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    /// A transition or submit attempt was refused because the current step
    /// is incomplete. Not a fault: the state machine is unchanged and the
    /// caller renders the refusal (e.g. as a disabled control).
    #[error("step {step} is incomplete; transition refused")]
    ValidationBlocked { step: Step },
    /// The persistence collaborator failed; the draft and step survive
    /// intact for a user-initiated retry.
    #[error(transparent)]
    Submit(#[from] SubmitError),
}
