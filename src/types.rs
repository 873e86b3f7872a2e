use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// unique identifier for a booking or enquiry
pub type BookingId = Uuid;

/// financing enquiry status
///
/// One closed union for the status strings the API exchanges, with a single
/// exhaustive label/badge mapping. Serialized forms match the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnquiryStatus {
    /// submitted, awaiting review
    Pending,
    /// provisionally approved pending documents
    PreApproved,
    /// loan approved
    Approved,
    /// loan rejected
    Rejected,
}

impl EnquiryStatus {
    /// user-facing label
    pub fn label(&self) -> &'static str {
        match self {
            EnquiryStatus::Pending => "Pending",
            EnquiryStatus::PreApproved => "Pre-Approved",
            EnquiryStatus::Approved => "Approved",
            EnquiryStatus::Rejected => "Rejected",
        }
    }

    /// badge tone for status display
    pub fn badge(&self) -> StatusBadge {
        match self {
            EnquiryStatus::Pending => StatusBadge::Amber,
            EnquiryStatus::PreApproved => StatusBadge::Blue,
            EnquiryStatus::Approved => StatusBadge::Green,
            EnquiryStatus::Rejected => StatusBadge::Red,
        }
    }

    /// whether the enquiry reached a terminal decision
    pub fn is_decided(&self) -> bool {
        matches!(self, EnquiryStatus::Approved | EnquiryStatus::Rejected)
    }
}

/// display tone for a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusBadge {
    Amber,
    Blue,
    Green,
    Red,
}

/// vehicle category used by catalog filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Commuter,
    Sport,
    Cruiser,
    Adventure,
    Scooter,
    Electric,
}

/// availability time-slot label as returned by the scheduling API
/// (e.g., "9:00 AM")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotLabel(pub String);

impl SlotLabel {
    pub fn new(label: impl Into<String>) -> Self {
        SlotLabel(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SlotLabel {
    fn from(s: &str) -> Self {
        SlotLabel(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&EnquiryStatus::PreApproved).unwrap();
        assert_eq!(json, r#""pre-approved""#);

        let back: EnquiryStatus = serde_json::from_str(r#""rejected""#).unwrap();
        assert_eq!(back, EnquiryStatus::Rejected);
    }

    #[test]
    fn test_status_mapping_exhaustive() {
        let all = [
            EnquiryStatus::Pending,
            EnquiryStatus::PreApproved,
            EnquiryStatus::Approved,
            EnquiryStatus::Rejected,
        ];
        for status in all {
            assert!(!status.label().is_empty());
        }
        assert_eq!(EnquiryStatus::Approved.badge(), StatusBadge::Green);
        assert_eq!(EnquiryStatus::Rejected.badge(), StatusBadge::Red);
        assert!(EnquiryStatus::Approved.is_decided());
        assert!(!EnquiryStatus::PreApproved.is_decided());
    }
}
