//! Wizard events — delivered to the hosting layer through an event channel.
//!
//! The core never depends on a rendering framework; instead every state
//! change (and every refused transition) is published here and the host
//! subscribes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;

use super::state::Step;
use crate::domain::model::DraftField;

/// An observable wizard state change.
#[derive(Clone, Debug, Serialize)]
pub enum WizardEvent {
    /// A draft field was edited.
    FieldUpdated {
        field: DraftField,
        timestamp: DateTime<Utc>,
    },

    /// The wizard moved forward one step.
    StepAdvanced {
        from: Step,
        to: Step,
        timestamp: DateTime<Utc>,
    },

    /// The wizard moved back one step.
    StepRetreated {
        from: Step,
        to: Step,
        timestamp: DateTime<Utc>,
    },

    /// A transition or submit was refused on an incomplete step. This is
    /// the rejected-transition signal the host renders as a disabled
    /// control, not a fault.
    TransitionBlocked {
        step: Step,
        missing: Vec<DraftField>,
        timestamp: DateTime<Utc>,
    },

    /// An evidence file was staged (replacing any previous one).
    AttachmentStaged {
        file_name: String,
        timestamp: DateTime<Utc>,
    },

    /// The staged evidence file was removed.
    AttachmentCleared { timestamp: DateTime<Utc> },

    /// A geolocation fix was folded into the draft's location field.
    LocationApplied {
        location: String,
        timestamp: DateTime<Utc>,
    },

    /// The persistence collaborator accepted the report; the wizard has
    /// reset to step 1 with an empty draft.
    SubmissionAccepted {
        issue_id: String,
        timestamp: DateTime<Utc>,
    },

    /// The persistence collaborator failed; draft and step are intact.
    SubmissionFailed {
        error: String,
        timestamp: DateTime<Utc>,
    },
}

/// Event sender half, held by the wizard.
pub type EventSender = mpsc::UnboundedSender<WizardEvent>;

/// Event receiver half, held by the hosting layer.
pub type EventReceiver = mpsc::UnboundedReceiver<WizardEvent>;

/// Create the wizard event channel.
pub fn create_event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_flow_through_the_channel() {
        let (sender, mut receiver) = create_event_channel();

        sender
            .send(WizardEvent::StepAdvanced {
                from: Step::Details,
                to: Step::LocationCategory,
                timestamp: Utc::now(),
            })
            .unwrap();

        match receiver.recv().await.unwrap() {
            WizardEvent::StepAdvanced { from, to, .. } => {
                assert_eq!(from, Step::Details);
                assert_eq!(to, Step::LocationCategory);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
