use hourglass_rs::SafeTimeProvider;
use std::collections::BTreeMap;

use crate::api::{BookingPayload, SubmissionApi};
use crate::errors::{Result, ShowroomError};
use crate::events::{Event, EventStore};
use crate::types::BookingId;
use crate::wizard::fields::{validate_fields, FieldValue};
use crate::wizard::flows::WizardFlow;

/// where the wizard is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    InProgress,
    Submitted,
}

/// result of a submit attempt that was not a misuse error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// collaborator accepted; wizard is now submitted
    Submitted(BookingId),
    /// final-step validation failed; error map populated, no call made
    Blocked,
    /// collaborator rejected; top-level error surfaced, values intact
    Rejected,
}

/// linear multi-step form flow controller
///
/// Field values persist across navigation. Validation is step-scoped and
/// stateless: `next` and `submit` inspect only the values current at the
/// moment of the call.
#[derive(Debug, Clone)]
pub struct WizardState {
    flow: WizardFlow,
    current_step: u32,
    field_values: BTreeMap<String, FieldValue>,
    field_errors: BTreeMap<String, String>,
    submission_error: Option<String>,
    is_submitting: bool,
    phase: WizardPhase,
    booking_id: Option<BookingId>,
}

impl WizardState {
    /// mount a new wizard with the flow's documented defaults
    pub fn new(flow: WizardFlow) -> Self {
        let field_values = flow.defaults.clone();
        Self {
            flow,
            current_step: 1,
            field_values,
            field_errors: BTreeMap::new(),
            submission_error: None,
            is_submitting: false,
            phase: WizardPhase::InProgress,
            booking_id: None,
        }
    }

    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    pub fn total_steps(&self) -> u32 {
        self.flow.total_steps()
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.field_values.get(name)
    }

    pub fn field_errors(&self) -> &BTreeMap<String, String> {
        &self.field_errors
    }

    pub fn submission_error(&self) -> Option<&str> {
        self.submission_error.as_deref()
    }

    pub fn booking_id(&self) -> Option<BookingId> {
        self.booking_id
    }

    /// apply a field edit; clears any error recorded for that field
    pub fn set_field(&mut self, name: &str, value: FieldValue) {
        self.field_values.insert(name.to_string(), value);
        self.field_errors.remove(name);
    }

    /// validate the current step and advance on success
    ///
    /// Returns true when the step changed. Validation failure keeps the
    /// current step and populates the error map. No-op once submitted.
    pub fn next(&mut self, time: &SafeTimeProvider, events: &mut EventStore) -> bool {
        if self.phase == WizardPhase::Submitted {
            return false;
        }

        let errors = self.validate_step(self.current_step, time);
        if !errors.is_empty() {
            events.emit(Event::StepValidationFailed {
                flow: self.flow.name.to_string(),
                step: self.current_step,
                fields: errors.keys().cloned().collect(),
            });
            self.field_errors = errors;
            return false;
        }

        self.field_errors.clear();
        if self.current_step < self.total_steps() {
            let from = self.current_step;
            self.current_step += 1;
            events.emit(Event::StepAdvanced {
                flow: self.flow.name.to_string(),
                from_step: from,
                to_step: self.current_step,
            });
            return true;
        }
        false
    }

    /// move back one step; never validates and never clears field values
    pub fn back(&mut self, events: &mut EventStore) -> bool {
        if self.current_step > 1 {
            let from = self.current_step;
            self.current_step -= 1;
            events.emit(Event::StepReverted {
                flow: self.flow.name.to_string(),
                from_step: from,
                to_step: self.current_step,
            });
            return true;
        }
        false
    }

    /// validate the final step and claim the submission gate
    ///
    /// Returns the payload to send, or `None` when validation blocked the
    /// attempt (error map populated, gate not claimed). Misuse (wrong step,
    /// duplicate attempt, already submitted) is an error. While the gate is
    /// held, `is_submitting` reads true and further attempts fail with
    /// `SubmissionInFlight` until `complete_submit` settles the call.
    pub fn begin_submit(
        &mut self,
        time: &SafeTimeProvider,
        events: &mut EventStore,
    ) -> Result<Option<BookingPayload>> {
        if self.phase == WizardPhase::Submitted {
            return Err(ShowroomError::AlreadySubmitted);
        }
        if self.is_submitting {
            return Err(ShowroomError::SubmissionInFlight);
        }
        if self.current_step != self.total_steps() {
            return Err(ShowroomError::NotOnFinalStep {
                current: self.current_step,
                total: self.total_steps(),
            });
        }

        let errors = self.validate_step(self.current_step, time);
        if !errors.is_empty() {
            events.emit(Event::StepValidationFailed {
                flow: self.flow.name.to_string(),
                step: self.current_step,
                fields: errors.keys().cloned().collect(),
            });
            self.field_errors = errors;
            return Ok(None);
        }
        self.field_errors.clear();

        events.emit(Event::SubmissionStarted {
            flow: self.flow.name.to_string(),
        });
        self.is_submitting = true;
        Ok(Some(self.assemble_payload()))
    }

    /// settle a submission begun with `begin_submit`, releasing the gate
    ///
    /// Success transitions to `Submitted`; failure surfaces a top-level
    /// error and keeps entered values for retry.
    pub fn complete_submit(
        &mut self,
        result: Result<BookingId>,
        events: &mut EventStore,
    ) -> Result<SubmitOutcome> {
        if !self.is_submitting {
            return Err(ShowroomError::InvalidConfiguration {
                message: "no submission in flight".to_string(),
            });
        }
        self.is_submitting = false;

        match result {
            Ok(booking_id) => {
                self.phase = WizardPhase::Submitted;
                self.booking_id = Some(booking_id);
                self.submission_error = None;
                events.emit(Event::SubmissionSucceeded {
                    flow: self.flow.name.to_string(),
                    booking_id,
                });
                Ok(SubmitOutcome::Submitted(booking_id))
            }
            Err(err) => {
                let message = err.to_string();
                self.submission_error = Some(message.clone());
                events.emit(Event::SubmissionFailed {
                    flow: self.flow.name.to_string(),
                    message,
                });
                Ok(SubmitOutcome::Rejected)
            }
        }
    }

    /// submit from the final step through the external collaborator
    ///
    /// Convenience composition of `begin_submit` and `complete_submit` for
    /// callers driving the collaborator call synchronously.
    pub fn submit(
        &mut self,
        api: &dyn SubmissionApi,
        time: &SafeTimeProvider,
        events: &mut EventStore,
    ) -> Result<SubmitOutcome> {
        let Some(payload) = self.begin_submit(time, events)? else {
            return Ok(SubmitOutcome::Blocked);
        };
        let result = api.submit(&payload);
        self.complete_submit(result, events)
    }

    /// restore defaults and return to step 1, from any state
    pub fn reset(&mut self, events: &mut EventStore) {
        self.field_values = self.flow.defaults.clone();
        self.field_errors.clear();
        self.submission_error = None;
        self.is_submitting = false;
        self.current_step = 1;
        self.phase = WizardPhase::InProgress;
        self.booking_id = None;
        events.emit(Event::WizardReset {
            flow: self.flow.name.to_string(),
        });
    }

    /// payload of current field values for the submission collaborator
    pub fn assemble_payload(&self) -> BookingPayload {
        BookingPayload {
            flow: self.flow.name.to_string(),
            fields: self.field_values.clone(),
        }
    }

    fn validate_step(&self, step: u32, time: &SafeTimeProvider) -> BTreeMap<String, String> {
        match self.flow.step(step) {
            Some(spec) => validate_fields(&spec.required, &self.field_values, time),
            None => BTreeMap::new(),
        }
    }
}
