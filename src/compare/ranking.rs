use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::compare::policy::ComparisonPolicy;
use crate::errors::{Result, ShowroomError};

/// attribute value on a comparable vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(Decimal),
    Text(String),
}

impl AttributeValue {
    /// numeric coercion: text and non-numeric values read as zero
    pub fn as_number(&self) -> Decimal {
        match self {
            AttributeValue::Number(n) => *n,
            AttributeValue::Text(_) => Decimal::ZERO,
        }
    }
}

impl From<Decimal> for AttributeValue {
    fn from(n: Decimal) -> Self {
        AttributeValue::Number(n)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        AttributeValue::Number(Decimal::from(n))
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

/// a vehicle participating in a side-by-side comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparableEntity {
    pub id: String,
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl ComparableEntity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    /// numeric value of an attribute; missing or textual reads as zero
    pub fn numeric(&self, attribute: &str) -> Decimal {
        self.attributes
            .get(attribute)
            .map(AttributeValue::as_number)
            .unwrap_or(Decimal::ZERO)
    }
}

/// ranking verdict for one entity on one attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Best,
    Worst,
    Neutral,
}

/// how many comparison slots the viewport offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotCapacity {
    Narrow,
    Medium,
    Wide,
}

impl SlotCapacity {
    pub fn slots(&self) -> usize {
        match self {
            SlotCapacity::Narrow => 2,
            SlotCapacity::Medium => 3,
            SlotCapacity::Wide => 4,
        }
    }
}

/// extremal attribute value across the present entities
///
/// Empty slots never participate; an all-empty set reads as zero.
pub fn find_extremum(
    slots: &[Option<ComparableEntity>],
    attribute: &str,
    higher_is_better: bool,
) -> Decimal {
    let values: Vec<Decimal> = slots
        .iter()
        .flatten()
        .map(|entity| entity.numeric(attribute))
        .collect();

    let Some(first) = values.first().copied() else {
        return Decimal::ZERO;
    };

    values.into_iter().fold(first, |acc, v| {
        if higher_is_better {
            acc.max(v)
        } else {
            acc.min(v)
        }
    })
}

/// classify one entity's attribute against the full slot set
///
/// A zero or missing raw value is never ranked. Worst requires at least two
/// present entities and never applies to an entity already Best, so ties
/// across the whole set read as Best for everyone.
pub fn classify(
    entity: &ComparableEntity,
    attribute: &str,
    higher_is_better: bool,
    slots: &[Option<ComparableEntity>],
) -> Verdict {
    let value = entity.numeric(attribute);
    if value.is_zero() {
        return Verdict::Neutral;
    }

    let best = find_extremum(slots, attribute, higher_is_better);
    if value == best {
        return Verdict::Best;
    }

    let present = slots.iter().flatten().count();
    if present > 1 {
        let worst = find_extremum(slots, attribute, !higher_is_better);
        if value == worst {
            return Verdict::Worst;
        }
    }

    Verdict::Neutral
}

/// side-by-side comparison slots under a direction policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonTable {
    capacity: SlotCapacity,
    slots: Vec<Option<ComparableEntity>>,
    policy: ComparisonPolicy,
}

impl ComparisonTable {
    pub fn new(capacity: SlotCapacity, policy: ComparisonPolicy) -> Self {
        Self {
            capacity,
            slots: vec![None; capacity.slots()],
            policy,
        }
    }

    pub fn capacity(&self) -> SlotCapacity {
        self.capacity
    }

    pub fn slots(&self) -> &[Option<ComparableEntity>] {
        &self.slots
    }

    /// place an entity into a slot
    pub fn place(&mut self, slot: usize, entity: ComparableEntity) -> Result<()> {
        let cell = self.slots.get_mut(slot).ok_or_else(|| {
            ShowroomError::InvalidConfiguration {
                message: format!(
                    "slot {slot} out of range for {} comparison slots",
                    self.capacity.slots()
                ),
            }
        })?;
        *cell = Some(entity);
        Ok(())
    }

    /// empty a slot
    pub fn clear(&mut self, slot: usize) -> Result<()> {
        let cell = self.slots.get_mut(slot).ok_or_else(|| {
            ShowroomError::InvalidConfiguration {
                message: format!(
                    "slot {slot} out of range for {} comparison slots",
                    self.capacity.slots()
                ),
            }
        })?;
        *cell = None;
        Ok(())
    }

    /// verdicts for every slot on one attribute, in slot order
    pub fn verdict_row(&self, attribute: &str) -> Vec<Option<Verdict>> {
        let higher = self.policy.higher_is_better(attribute);
        self.slots
            .iter()
            .map(|slot| {
                slot.as_ref()
                    .map(|entity| classify(entity, attribute, higher, &self.slots))
            })
            .collect()
    }
}
