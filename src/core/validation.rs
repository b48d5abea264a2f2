//! Per-step draft validation.
//!
//! Pure predicates over the draft — cheap string checks only, safe to call
//! on every keystroke. Validity never depends on the optional attachment.

use super::state::Step;
use crate::domain::model::{DraftField, IssueDraft};

/// Whether the draft satisfies the requirements of the given step.
pub fn is_step_valid(step: Step, draft: &IssueDraft) -> bool {
    missing_fields(step, draft).is_empty()
}

/// The required fields of `step` that are still empty or unselected.
///
/// Empty result means the step validates. Intended for rendering disabled
/// controls and field-level hints.
pub fn missing_fields(step: Step, draft: &IssueDraft) -> Vec<DraftField> {
    let mut missing = Vec::new();
    match step {
        Step::Details => {
            if draft.title.trim().is_empty() {
                missing.push(DraftField::Title);
            }
            if draft.description.trim().is_empty() {
                missing.push(DraftField::Description);
            }
        }
        Step::LocationCategory => {
            if draft.location.trim().is_empty() {
                missing.push(DraftField::Location);
            }
            if draft.category.is_none() {
                missing.push(DraftField::Category);
            }
        }
        Step::PriorityEvidence => {
            if draft.priority.is_none() {
                missing.push(DraftField::Priority);
            }
        }
    }
    missing
}

/// The first step whose requirements the draft does not yet satisfy.
///
/// `None` means the draft is complete and well-formed for submission.
pub fn first_incomplete_step(draft: &IssueDraft) -> Option<Step> {
    [Step::Details, Step::LocationCategory, Step::PriorityEvidence]
        .into_iter()
        .find(|step| !is_step_valid(*step, draft))
}
