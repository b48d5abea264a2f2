//! The report wizard — the single mutator of the submission workflow state.
//!
//! [`ReportWizard`] owns the step state machine, the attachment stager, and
//! the submission dispatcher, and publishes every state change on the event
//! bus. All operations take `&mut self`: the exclusive borrow is what
//! enforces the one-mutation-at-a-time rule, including the ban on
//! re-entrant submits.

use chrono::Utc;
use std::sync::Arc;

use super::event_bus::{create_event_channel, EventReceiver, EventSender, WizardEvent};
use super::stager::AttachmentStager;
use super::state::{Step, WizardState};
use super::validation::{first_incomplete_step, is_step_valid, missing_fields};
use crate::domain::model::{AttachmentRef, FieldEdit, IssueDraft};
use crate::error::{WizardError, WizardResult};
use crate::location::PositionFix;
use crate::submit::{IssueAck, IssueReport, IssueStore, SubmissionDispatcher};

/// The issue-submission wizard.
pub struct ReportWizard {
    state: WizardState,
    stager: AttachmentStager,
    dispatcher: SubmissionDispatcher,
    events: EventSender,
}

impl ReportWizard {
    /// Create a wizard in its initial state (step 1, empty draft) wired to
    /// the given persistence collaborator. Returns the wizard and the
    /// receiving half of its event channel.
    pub fn new(store: Arc<dyn IssueStore>) -> (Self, EventReceiver) {
        let (events, receiver) = create_event_channel();
        let wizard = ReportWizard {
            state: WizardState::new(),
            stager: AttachmentStager::new(),
            dispatcher: SubmissionDispatcher::new(store),
            events,
        };
        (wizard, receiver)
    }

    pub fn current_step(&self) -> Step {
        self.state.current_step()
    }

    pub fn draft(&self) -> &IssueDraft {
        self.state.draft()
    }

    /// Whether the draft satisfies the given step's requirements.
    pub fn is_step_valid(&self, step: Step) -> bool {
        self.state.is_step_valid(step)
    }

    /// Edit a draft field. Available in any step; always succeeds.
    pub fn update(&mut self, edit: FieldEdit) {
        let field = edit.field();
        self.state.update(edit);
        self.emit(WizardEvent::FieldUpdated {
            field,
            timestamp: Utc::now(),
        });
    }

    /// Advance one step iff the current step validates.
    ///
    /// Returns whether the step changed. On refusal the state is untouched
    /// and a [`WizardEvent::TransitionBlocked`] is published.
    pub fn advance(&mut self) -> bool {
        let from = self.state.current_step();
        if self.state.advance() {
            self.emit(WizardEvent::StepAdvanced {
                from,
                to: self.state.current_step(),
                timestamp: Utc::now(),
            });
            return true;
        }
        if !is_step_valid(from, self.state.draft()) {
            self.emit(WizardEvent::TransitionBlocked {
                step: from,
                missing: missing_fields(from, self.state.draft()),
                timestamp: Utc::now(),
            });
        }
        false
    }

    /// Step back one step. Unconditional; never discards entered data.
    pub fn retreat(&mut self) -> bool {
        let from = self.state.current_step();
        if self.state.retreat() {
            self.emit(WizardEvent::StepRetreated {
                from,
                to: self.state.current_step(),
                timestamp: Utc::now(),
            });
            return true;
        }
        false
    }

    /// Stage an evidence file, replacing any previously staged one.
    pub fn stage_attachment(&mut self, file: AttachmentRef) {
        let file_name = file.file_name.clone();
        self.stager.stage(file);
        self.sync_attachment();
        self.emit(WizardEvent::AttachmentStaged {
            file_name,
            timestamp: Utc::now(),
        });
    }

    /// Remove the staged evidence file, if any.
    pub fn clear_attachment(&mut self) {
        self.stager.clear();
        self.sync_attachment();
        self.emit(WizardEvent::AttachmentCleared {
            timestamp: Utc::now(),
        });
    }

    pub fn attachment(&self) -> Option<&AttachmentRef> {
        self.stager.staged()
    }

    /// Fold a successful geolocation fix into the draft's location field,
    /// formatted to six decimal places. Acquisition errors never reach
    /// this point — the location field is untouched on any failure.
    pub fn apply_fix(&mut self, fix: &PositionFix) {
        let location = fix.to_location_string();
        self.state.update(FieldEdit::Location(location.clone()));
        self.emit(WizardEvent::LocationApplied {
            location,
            timestamp: Utc::now(),
        });
    }

    /// Submit the completed draft to the persistence collaborator.
    ///
    /// Only callable from the final step with a fully well-formed draft;
    /// anything less returns [`WizardError::ValidationBlocked`] without
    /// touching the state. On acceptance the wizard resets to step 1 with
    /// an empty draft and cleared stager; on collaborator failure the step
    /// and draft survive unchanged for a user-initiated retry.
    pub async fn submit(&mut self) -> WizardResult<IssueAck> {
        let step = self.state.current_step();
        if step != Step::FINAL {
            return Err(self.blocked(step));
        }
        if first_incomplete_step(self.state.draft()).is_some() {
            return Err(self.blocked(step));
        }
        let Some(report) = IssueReport::assemble(self.state.draft()) else {
            // Unreachable once the draft is complete; refuse rather than panic.
            return Err(self.blocked(step));
        };

        match self.dispatcher.dispatch(report).await {
            Ok(ack) => {
                self.state.reset();
                self.stager.clear();
                self.emit(WizardEvent::SubmissionAccepted {
                    issue_id: ack.issue_id.clone(),
                    timestamp: Utc::now(),
                });
                Ok(ack)
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission failed; draft retained for retry");
                self.emit(WizardEvent::SubmissionFailed {
                    error: err.to_string(),
                    timestamp: Utc::now(),
                });
                Err(WizardError::Submit(err))
            }
        }
    }

    /// Discard everything and return to step 1 with an empty draft.
    pub fn restart(&mut self) {
        self.state.reset();
        self.stager.clear();
    }

    fn blocked(&self, step: Step) -> WizardError {
        let _ = self.events.send(WizardEvent::TransitionBlocked {
            step,
            missing: missing_fields(step, self.state.draft()),
            timestamp: Utc::now(),
        });
        WizardError::ValidationBlocked { step }
    }

    fn sync_attachment(&mut self) {
        // The stager owns the slot; the draft carries a mirror so the
        // assembled report sees one coherent record.
        self.state.draft_mut().attachment = self.stager.staged().cloned();
    }

    fn emit(&self, event: WizardEvent) {
        // A host that dropped its receiver just stops observing.
        let _ = self.events.send(event);
    }
}
