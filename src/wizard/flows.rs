use serde::Serialize;
use std::collections::BTreeMap;

use crate::wizard::fields::{Constraint, FieldSpec, FieldValue};

/// one step of a wizard flow with its required fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSpec {
    pub name: &'static str,
    pub required: Vec<FieldSpec>,
}

impl StepSpec {
    pub fn new(name: &'static str, required: Vec<FieldSpec>) -> Self {
        Self { name, required }
    }
}

/// a linear multi-step form flow
#[derive(Debug, Clone, Serialize)]
pub struct WizardFlow {
    pub name: &'static str,
    pub steps: Vec<StepSpec>,
    pub defaults: BTreeMap<String, FieldValue>,
}

impl WizardFlow {
    pub fn total_steps(&self) -> u32 {
        self.steps.len() as u32
    }

    /// step spec by 1-indexed step number
    pub fn step(&self, number: u32) -> Option<&StepSpec> {
        if number == 0 {
            return None;
        }
        self.steps.get((number - 1) as usize)
    }

    /// four-step service booking flow
    pub fn service_booking() -> Self {
        let steps = vec![
            StepSpec::new(
                "vehicle",
                vec![
                    FieldSpec::new("bike_model", "Bike model", Constraint::Required),
                    FieldSpec::new(
                        "registration_number",
                        "Registration number",
                        Constraint::Required,
                    ),
                ],
            ),
            StepSpec::new(
                "service",
                vec![FieldSpec::new(
                    "service_type",
                    "Service type",
                    Constraint::Required,
                )],
            ),
            StepSpec::new(
                "schedule",
                vec![
                    FieldSpec::new("branch", "Branch", Constraint::Required),
                    FieldSpec::new("date", "Preferred date", Constraint::PresentFutureDate),
                    FieldSpec::new("slot", "Time slot", Constraint::Required),
                ],
            ),
            StepSpec::new(
                "contact",
                vec![
                    FieldSpec::new("customer_name", "Name", Constraint::Required),
                    FieldSpec::new("phone", "Phone number", Constraint::Required),
                    FieldSpec::new(
                        "terms_accepted",
                        "Terms and conditions",
                        Constraint::MustBeAccepted,
                    ),
                ],
            ),
        ];

        Self {
            name: "service-booking",
            defaults: defaults_for(&steps),
            steps,
        }
    }

    /// five-step test-ride booking flow
    pub fn test_ride_booking() -> Self {
        let steps = vec![
            StepSpec::new(
                "bike",
                vec![FieldSpec::new("bike_model", "Bike model", Constraint::Required)],
            ),
            StepSpec::new(
                "personal",
                vec![
                    FieldSpec::new("customer_name", "Name", Constraint::Required),
                    FieldSpec::new("phone", "Phone number", Constraint::Required),
                ],
            ),
            StepSpec::new(
                "licence",
                vec![FieldSpec::new(
                    "licence_number",
                    "Licence number",
                    Constraint::Required,
                )],
            ),
            StepSpec::new(
                "schedule",
                vec![
                    FieldSpec::new("branch", "Branch", Constraint::Required),
                    FieldSpec::new("date", "Preferred date", Constraint::PresentFutureDate),
                    FieldSpec::new("slot", "Time slot", Constraint::Required),
                ],
            ),
            StepSpec::new(
                "confirm",
                vec![FieldSpec::new(
                    "terms_accepted",
                    "Terms and conditions",
                    Constraint::MustBeAccepted,
                )],
            ),
        ];

        Self {
            name: "test-ride-booking",
            defaults: defaults_for(&steps),
            steps,
        }
    }
}

/// documented defaults: blank text for value fields, unset flag for
/// acceptance fields, no date selected
fn defaults_for(steps: &[StepSpec]) -> BTreeMap<String, FieldValue> {
    let mut defaults = BTreeMap::new();
    for step in steps {
        for field in &step.required {
            let value = match field.constraint {
                Constraint::MustBeAccepted => FieldValue::Flag(false),
                Constraint::PresentFutureDate => FieldValue::Text(String::new()),
                Constraint::Required => FieldValue::Text(String::new()),
            };
            defaults.insert(field.name.to_string(), value);
        }
    }
    defaults
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_step_counts() {
        assert_eq!(WizardFlow::service_booking().total_steps(), 4);
        assert_eq!(WizardFlow::test_ride_booking().total_steps(), 5);
    }

    #[test]
    fn test_step_indexing_is_one_based() {
        let flow = WizardFlow::service_booking();
        assert!(flow.step(0).is_none());
        assert_eq!(flow.step(1).unwrap().name, "vehicle");
        assert_eq!(flow.step(4).unwrap().name, "contact");
        assert!(flow.step(5).is_none());
    }

    #[test]
    fn test_defaults_cover_every_required_field() {
        for flow in [WizardFlow::service_booking(), WizardFlow::test_ride_booking()] {
            for step in &flow.steps {
                for field in &step.required {
                    assert!(
                        flow.defaults.contains_key(field.name),
                        "missing default for {}",
                        field.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_terms_default_unset() {
        let flow = WizardFlow::test_ride_booking();
        assert_eq!(
            flow.defaults.get("terms_accepted"),
            Some(&FieldValue::Flag(false))
        );
    }
}
