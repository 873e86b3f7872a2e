use std::collections::HashMap;

/// process-wide visit tracking behind an injectable seam
///
/// The surrounding app keeps a "has visited" flag and a visitor counter in a
/// persistent key-value medium; this trait lets the core consume that state
/// while tests run against the in-memory implementation.
pub trait VisitStore {
    fn record_visit(&mut self, page: &str);
    fn visit_count(&self, page: &str) -> u64;
    fn has_visited(&self, page: &str) -> bool;
}

/// in-memory visit store
#[derive(Debug, Default)]
pub struct InMemoryVisitStore {
    counts: HashMap<String, u64>,
}

impl InMemoryVisitStore {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl VisitStore for InMemoryVisitStore {
    fn record_visit(&mut self, page: &str) {
        *self.counts.entry(page.to_string()).or_insert(0) += 1;
    }

    fn visit_count(&self, page: &str) -> u64 {
        self.counts.get(page).copied().unwrap_or(0)
    }

    fn has_visited(&self, page: &str) -> bool {
        self.visit_count(page) > 0
    }
}
