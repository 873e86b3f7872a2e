use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::BookingId;

/// all events emitted by the booking flows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    // wizard navigation events
    StepAdvanced {
        flow: String,
        from_step: u32,
        to_step: u32,
    },
    StepReverted {
        flow: String,
        from_step: u32,
        to_step: u32,
    },
    StepValidationFailed {
        flow: String,
        step: u32,
        fields: Vec<String>,
    },
    WizardReset {
        flow: String,
    },

    // submission events
    SubmissionStarted {
        flow: String,
    },
    SubmissionSucceeded {
        flow: String,
        booking_id: BookingId,
    },
    SubmissionFailed {
        flow: String,
        message: String,
    },

    // availability events
    AvailabilityRequested {
        branch_id: String,
        date: NaiveDate,
        sequence: u64,
    },
    AvailabilityApplied {
        branch_id: String,
        date: NaiveDate,
        slot_count: usize,
    },
    AvailabilityDiscarded {
        branch_id: String,
        date: NaiveDate,
        sequence: u64,
    },
    AvailabilityUnavailable {
        branch_id: String,
        date: NaiveDate,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
