use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// per-attribute direction policy for comparison ranking
///
/// Price and kerb weight rank lower-is-better; displacement and power rank
/// higher-is-better. Attributes without an explicit entry default to
/// higher-is-better.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonPolicy {
    directions: BTreeMap<String, bool>,
}

impl ComparisonPolicy {
    /// empty policy: every attribute ranks higher-is-better
    pub fn new() -> Self {
        Self {
            directions: BTreeMap::new(),
        }
    }

    /// standard showroom policy
    pub fn standard() -> Self {
        let mut policy = Self::new();
        policy.set("price", false);
        policy.set("weight", false);
        policy.set("displacement", true);
        policy.set("power", true);
        policy
    }

    /// set the direction for an attribute
    pub fn set(&mut self, attribute: &str, higher_is_better: bool) {
        self.directions
            .insert(attribute.to_string(), higher_is_better);
    }

    /// direction for an attribute, defaulting to higher-is-better
    pub fn higher_is_better(&self, attribute: &str) -> bool {
        self.directions.get(attribute).copied().unwrap_or(true)
    }
}

impl Default for ComparisonPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_directions() {
        let policy = ComparisonPolicy::standard();
        assert!(!policy.higher_is_better("price"));
        assert!(!policy.higher_is_better("weight"));
        assert!(policy.higher_is_better("displacement"));
        assert!(policy.higher_is_better("power"));
    }

    #[test]
    fn test_unknown_attribute_defaults_higher() {
        let policy = ComparisonPolicy::standard();
        assert!(policy.higher_is_better("torque"));
    }

    #[test]
    fn test_override() {
        let mut policy = ComparisonPolicy::standard();
        policy.set("torque", false);
        assert!(!policy.higher_is_better("torque"));
    }
}
