//! Core wizard machinery: step state machine, draft validation, attachment
//! staging, and the event bus the hosting layer subscribes to.

pub mod event_bus;
pub mod stager;
pub mod state;
pub mod validation;
pub mod wizard;

pub use event_bus::{create_event_channel, EventReceiver, EventSender, WizardEvent};
pub use stager::AttachmentStager;
pub use state::{Step, WizardState};
pub use validation::{first_incomplete_step, is_step_valid, missing_fields};
pub use wizard::ReportWizard;
