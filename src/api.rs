use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::decimal::Money;
use crate::errors::{Result, ShowroomError};
use crate::types::{BookingId, EnquiryStatus, SlotLabel, VehicleCategory};
use crate::wizard::fields::FieldValue;

/// standard response envelope from the dealership API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// collapse the envelope into a uniform request-failed error on
    /// `success: false` or absent data
    pub fn into_result(self) -> Result<T> {
        if !self.success {
            return Err(ShowroomError::RequestFailed {
                message: self
                    .message
                    .unwrap_or_else(|| "request failed".to_string()),
            });
        }
        self.data.ok_or_else(|| ShowroomError::RequestFailed {
            message: "response carried no data".to_string(),
        })
    }
}

/// catalog filter parameters
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VehicleQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<VehicleCategory>,
    pub in_stock_only: bool,
    pub page: u32,
    pub page_size: u32,
}

/// payload assembled from validated wizard field values
///
/// Dates serialize as ISO calendar dates (`YYYY-MM-DD`) via the untagged
/// `FieldValue` encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPayload {
    pub flow: String,
    pub fields: BTreeMap<String, FieldValue>,
}

/// trade-in details attached to a financing enquiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeIn {
    pub model: String,
    pub year: i32,
    pub estimated_value: Money,
}

/// financing enquiry as exchanged with the API
///
/// The trade-in is an explicit optional variant so the absence case is
/// handled once at this boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceEnquiry {
    pub bike_model: String,
    pub price: Money,
    pub down_payment: Money,
    pub term_months: i32,
    pub status: EnquiryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_in: Option<TradeIn>,
}

impl FinanceEnquiry {
    pub fn has_trade_in(&self) -> bool {
        self.trade_in.is_some()
    }

    /// amount to finance: price minus down payment, minus any trade-in value
    pub fn financed_amount(&self) -> Money {
        let trade_in_value = self
            .trade_in
            .as_ref()
            .map(|t| t.estimated_value)
            .unwrap_or(Money::ZERO);
        (self.price - self.down_payment - trade_in_value).max(Money::ZERO)
    }
}

/// booking/enquiry submission collaborator
pub trait SubmissionApi {
    fn submit(&self, payload: &BookingPayload) -> Result<BookingId>;
}

/// branch availability collaborator
///
/// An empty slot list is a valid "fully booked" response, not an error.
pub trait AvailabilityApi {
    fn open_slots(&self, branch_id: &str, date: NaiveDate) -> Result<Vec<SlotLabel>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_envelope_success() {
        let envelope: ApiEnvelope<Vec<String>> = serde_json::from_str(
            r#"{"success": true, "data": ["9:00 AM", "9:30 AM"]}"#,
        )
        .unwrap();
        let slots = envelope.into_result().unwrap();
        assert_eq!(slots.len(), 2);
    }

    #[test]
    fn test_envelope_failure_variants() {
        let rejected: ApiEnvelope<Vec<String>> =
            serde_json::from_str(r#"{"success": false, "message": "branch closed"}"#).unwrap();
        let err = rejected.into_result().unwrap_err();
        assert!(err.to_string().contains("branch closed"));

        let empty: ApiEnvelope<Vec<String>> =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(empty.into_result().is_err());
    }

    #[test]
    fn test_payload_date_wire_format() {
        let mut fields = BTreeMap::new();
        fields.insert(
            "date".to_string(),
            FieldValue::Date(NaiveDate::from_ymd_opt(2026, 4, 24).unwrap()),
        );
        fields.insert(
            "branch".to_string(),
            FieldValue::Text("City Centre".to_string()),
        );
        let payload = BookingPayload {
            flow: "service-booking".to_string(),
            fields,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["fields"]["date"], "2026-04-24");
        assert_eq!(json["fields"]["branch"], "City Centre");
    }

    #[test]
    fn test_vehicle_query_wire_format() {
        let query = VehicleQuery {
            category: Some(VehicleCategory::Cruiser),
            in_stock_only: true,
            page: 2,
            page_size: 12,
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["category"], "cruiser");
        assert_eq!(json["in_stock_only"], true);

        // absent category is omitted, not null
        let bare = VehicleQuery::default();
        let json = serde_json::to_value(&bare).unwrap();
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_enquiry_trade_in_boundary() {
        let without = FinanceEnquiry {
            bike_model: "Interceptor 650".to_string(),
            price: Money::from_major(1_000_000),
            down_payment: Money::from_major(40_000),
            term_months: 36,
            status: EnquiryStatus::Pending,
            trade_in: None,
        };
        assert!(!without.has_trade_in());
        assert_eq!(without.financed_amount(), Money::from_major(960_000));

        let with = FinanceEnquiry {
            trade_in: Some(TradeIn {
                model: "Classic 350".to_string(),
                year: 2019,
                estimated_value: Money::from_major(110_000),
            }),
            ..without.clone()
        };
        assert!(with.has_trade_in());
        assert_eq!(with.financed_amount(), Money::from_major(850_000));
    }

    #[test]
    fn test_enquiry_financed_amount_floors_at_zero() {
        let enquiry = FinanceEnquiry {
            bike_model: "Hness CB350".to_string(),
            price: Money::from_major(200_000),
            down_payment: Money::from_major(150_000),
            term_months: 12,
            status: EnquiryStatus::Pending,
            trade_in: Some(TradeIn {
                model: "Activa".to_string(),
                year: 2020,
                estimated_value: Money::from_major(80_000),
            }),
        };
        assert_eq!(enquiry.financed_amount(), Money::ZERO);
    }

    #[test]
    fn test_enquiry_round_trip() {
        let enquiry = FinanceEnquiry {
            bike_model: "Duke 390".to_string(),
            price: Money::from_decimal(dec!(312500.50)),
            down_payment: Money::from_major(50_000),
            term_months: 24,
            status: EnquiryStatus::PreApproved,
            trade_in: None,
        };
        let json = serde_json::to_string(&enquiry).unwrap();
        assert!(json.contains(r#""status":"pre-approved""#));
        let back: FinanceEnquiry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, enquiry);
    }
}
