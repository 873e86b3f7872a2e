pub mod api;
pub mod compare;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod loan;
pub mod store;
pub mod types;
pub mod wizard;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{Result, ShowroomError};
pub use events::{Event, EventStore};
pub use api::{
    ApiEnvelope, AvailabilityApi, BookingPayload, FinanceEnquiry, SubmissionApi, TradeIn,
    VehicleQuery,
};
pub use compare::{
    classify, find_extremum, AttributeValue, ComparableEntity, ComparisonPolicy, ComparisonTable,
    SlotCapacity, Verdict,
};
pub use loan::{compute_emi, InstallmentSchedule, LoanQuote, LoanTerms};
pub use store::{InMemoryVisitStore, VisitStore};
pub use types::{BookingId, EnquiryStatus, SlotLabel, StatusBadge, VehicleCategory};
pub use wizard::{
    AvailabilityTracker, Constraint, FieldSpec, FieldValue, LookupState, LookupTicket,
    SubmitOutcome, WizardFlow, WizardPhase, WizardState,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
