use chrono::NaiveDate;
use serde::Serialize;

use crate::events::{Event, EventStore};
use crate::types::SlotLabel;

/// identifies one availability lookup; sequence numbers are monotonic so a
/// newer request supersedes every older one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub branch_id: String,
    pub date: NaiveDate,
    sequence: u64,
}

impl LookupTicket {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// availability lookup state for the branch/date currently selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LookupState {
    /// no lookup requested yet
    Idle,
    /// a lookup is in flight
    Pending,
    /// slot list installed; empty means fully booked
    Ready(Vec<SlotLabel>),
    /// lookup failed; presented as "no slots available"
    Unavailable,
}

impl Default for LookupState {
    fn default() -> Self {
        LookupState::Idle
    }
}

/// last-write-wins tracker for branch/date availability lookups
///
/// Only the most recently issued ticket may install a result; responses for
/// superseded selections are discarded so they never overwrite newer state.
#[derive(Debug, Default)]
pub struct AvailabilityTracker {
    next_sequence: u64,
    current: Option<u64>,
    state: LookupState,
}

impl AvailabilityTracker {
    pub fn new() -> Self {
        Self {
            next_sequence: 0,
            current: None,
            state: LookupState::Idle,
        }
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    /// slots to display: only a Ready state has any
    pub fn slots(&self) -> &[SlotLabel] {
        match &self.state {
            LookupState::Ready(slots) => slots,
            _ => &[],
        }
    }

    /// begin a lookup for a branch/date selection, superseding any in-flight
    /// lookup
    pub fn begin_lookup(
        &mut self,
        branch_id: &str,
        date: NaiveDate,
        events: &mut EventStore,
    ) -> LookupTicket {
        self.next_sequence += 1;
        let sequence = self.next_sequence;
        self.current = Some(sequence);
        self.state = LookupState::Pending;
        events.emit(Event::AvailabilityRequested {
            branch_id: branch_id.to_string(),
            date,
            sequence,
        });
        LookupTicket {
            branch_id: branch_id.to_string(),
            date,
            sequence,
        }
    }

    /// install a successful response; stale tickets are discarded
    ///
    /// Returns true when the response was applied.
    pub fn apply(
        &mut self,
        ticket: &LookupTicket,
        slots: Vec<SlotLabel>,
        events: &mut EventStore,
    ) -> bool {
        if self.current != Some(ticket.sequence) {
            events.emit(Event::AvailabilityDiscarded {
                branch_id: ticket.branch_id.clone(),
                date: ticket.date,
                sequence: ticket.sequence,
            });
            return false;
        }
        events.emit(Event::AvailabilityApplied {
            branch_id: ticket.branch_id.clone(),
            date: ticket.date,
            slot_count: slots.len(),
        });
        self.state = LookupState::Ready(slots);
        true
    }

    /// record a failed lookup; degrades to the "no slots available" state,
    /// under the same staleness rule as `apply`
    pub fn apply_failure(&mut self, ticket: &LookupTicket, events: &mut EventStore) -> bool {
        if self.current != Some(ticket.sequence) {
            events.emit(Event::AvailabilityDiscarded {
                branch_id: ticket.branch_id.clone(),
                date: ticket.date,
                sequence: ticket.sequence,
            });
            return false;
        }
        events.emit(Event::AvailabilityUnavailable {
            branch_id: ticket.branch_id.clone(),
            date: ticket.date,
        });
        self.state = LookupState::Unavailable;
        true
    }

    /// abandon the current lookup (navigation away or reset); any in-flight
    /// response becomes stale
    pub fn cancel(&mut self) {
        self.current = None;
        self.state = LookupState::Idle;
    }
}
