pub mod availability;
pub mod fields;
pub mod flows;
pub mod state;

pub use availability::{AvailabilityTracker, LookupState, LookupTicket};
pub use fields::{validate_fields, Constraint, FieldSpec, FieldValue};
pub use flows::{StepSpec, WizardFlow};
pub use state::{SubmitOutcome, WizardPhase, WizardState};
