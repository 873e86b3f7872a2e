use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// current value of a wizard form field
///
/// Untagged so payloads carry plain JSON scalars; dates serialize as ISO
/// `YYYY-MM-DD` strings. Variant order matters for deserialization: dates
/// must be tried before free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Amount(Decimal),
    Date(NaiveDate),
    Text(String),
}

impl FieldValue {
    /// empty text is the "no value entered" state
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.trim().is_empty())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

/// declarative validation predicate for a required field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constraint {
    /// present and non-blank
    Required,
    /// a date that is today or later
    PresentFutureDate,
    /// a flag that must be set
    MustBeAccepted,
}

/// one required field in a wizard step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub constraint: Constraint,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, constraint: Constraint) -> Self {
        Self {
            name,
            label,
            constraint,
        }
    }
}

/// validate one step's required fields against current values
///
/// Stateless: only the values at the moment of the call are inspected.
/// Returns an error map keyed by field name; failures are never errors in
/// the `Result` sense.
pub fn validate_fields(
    specs: &[FieldSpec],
    values: &BTreeMap<String, FieldValue>,
    time: &SafeTimeProvider,
) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();
    let today = time.now().date_naive();

    for spec in specs {
        let value = values.get(spec.name);
        let message = match spec.constraint {
            Constraint::Required => match value {
                None => Some(format!("{} is required", spec.label)),
                Some(v) if v.is_blank() => Some(format!("{} is required", spec.label)),
                Some(_) => None,
            },
            Constraint::PresentFutureDate => match value.and_then(FieldValue::as_date) {
                None => Some(format!("{} is required", spec.label)),
                Some(date) if date < today => {
                    Some(format!("{} must be today or a future date", spec.label))
                }
                Some(_) => None,
            },
            Constraint::MustBeAccepted => match value.and_then(FieldValue::as_flag) {
                Some(true) => None,
                _ => Some(format!("{} must be accepted", spec.label)),
            },
        };

        if let Some(message) = message {
            errors.insert(spec.name.to_string(), message);
        }
    }

    errors
}
