use reflscope_api::TypeName;
use std::collections::{BTreeSet, HashSet};

/// Mutable bookkeeping for one closure run.
///
/// The processed set is shared by every request of the run: once a type has been
/// expanded it is never expanded again, whichever request reaches it next.
#[derive(Debug, Default)]
pub struct ClosureState {
    processed: HashSet<TypeName>,
    unresolved: BTreeSet<TypeName>,
}

impl ClosureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_processed(&self, name: &str) -> bool {
        self.processed.contains(name)
    }

    /// Returns `false` if the name was already marked.
    pub fn mark_processed(&mut self, name: &str) -> bool {
        self.processed.insert(TypeName::from(name))
    }

    pub fn record_unresolved(&mut self, name: &str) {
        self.unresolved.insert(TypeName::from(name));
    }

    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    /// Names missing from the index, sorted.
    pub fn unresolved(&self) -> &BTreeSet<TypeName> {
        &self.unresolved
    }
}
