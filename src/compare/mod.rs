pub mod policy;
pub mod ranking;

pub use policy::ComparisonPolicy;
pub use ranking::{
    classify, find_extremum, AttributeValue, ComparableEntity, ComparisonTable, SlotCapacity,
    Verdict,
};
