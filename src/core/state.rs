//! Wizard step state machine.
//!
//! [`WizardState`] is an explicit value — current step plus the accumulated
//! draft — with transition operations instead of ambient re-render state.
//! Forward transitions are gated on per-step validity; backward transitions
//! are unconditional and never discard entered data.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation::is_step_valid;
use crate::domain::model::{FieldEdit, IssueDraft};

/// One of the three sequential wizard steps.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Step 1 — title and description.
    #[default]
    Details,
    /// Step 2 — location and category.
    LocationCategory,
    /// Step 3 — priority and optional evidence.
    PriorityEvidence,
}

impl Step {
    /// The last step, from which submission is possible.
    pub const FINAL: Step = Step::PriorityEvidence;

    /// 1-based step number, as shown to the user.
    pub fn number(&self) -> u8 {
        match self {
            Step::Details => 1,
            Step::LocationCategory => 2,
            Step::PriorityEvidence => 3,
        }
    }

    pub(crate) fn next(&self) -> Option<Step> {
        match self {
            Step::Details => Some(Step::LocationCategory),
            Step::LocationCategory => Some(Step::PriorityEvidence),
            Step::PriorityEvidence => None,
        }
    }

    pub(crate) fn previous(&self) -> Option<Step> {
        match self {
            Step::Details => None,
            Step::LocationCategory => Some(Step::Details),
            Step::PriorityEvidence => Some(Step::LocationCategory),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Current step plus the accumulated draft.
///
/// The draft is mutated only through [`update`](Self::update); the step only
/// advances through a valid draft and only resets via [`reset`](Self::reset)
/// after a successful submission or an explicit restart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    current_step: Step,
    draft: IssueDraft,
}

impl WizardState {
    /// Initial state: step 1 with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub fn draft(&self) -> &IssueDraft {
        &self.draft
    }

    /// Apply a field edit. Available in any step; always succeeds.
    pub fn update(&mut self, edit: FieldEdit) {
        self.draft.apply(edit);
    }

    /// Advance to the next step iff the current step validates.
    ///
    /// Returns whether the step changed. An invalid draft (or the final
    /// step) refuses silently — the state is untouched.
    pub fn advance(&mut self) -> bool {
        if !is_step_valid(self.current_step, &self.draft) {
            return false;
        }
        match self.current_step.next() {
            Some(next) => {
                self.current_step = next;
                true
            }
            None => false,
        }
    }

    /// Step back one step. Unconditional; entered data is preserved.
    ///
    /// Returns whether the step changed (false on step 1).
    pub fn retreat(&mut self) -> bool {
        match self.current_step.previous() {
            Some(previous) => {
                self.current_step = previous;
                true
            }
            None => false,
        }
    }

    /// Whether the draft satisfies the given step's requirements.
    pub fn is_step_valid(&self, step: Step) -> bool {
        is_step_valid(step, &self.draft)
    }

    pub(crate) fn draft_mut(&mut self) -> &mut IssueDraft {
        &mut self.draft
    }

    /// Back to step 1 with an empty draft.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
