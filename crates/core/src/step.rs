use crate::engine::ClosureEngine;
use crate::error::Result;
use crate::filter::{filter_warnings, platform_type_rule, render_unindexed_warning};
use crate::predicate::{DescriptorPredicate, NamePredicate, PredicateRegistry};
use crate::request::HierarchyRequest;
use crate::state::ClosureState;
use reflscope_api::{RegistrationSink, TypeIndexPtr, TypeName};
use std::fmt;
use std::time::Instant;
use tracing::{info, warn};

/// Outcome of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClosureReport {
    /// Records handed to the sink, one per distinct type reached
    pub records: usize,
    /// Unresolved types left after warning filtering, sorted
    pub unresolved: Vec<TypeName>,
}

impl ClosureReport {
    pub fn warning_message(&self) -> Option<String> {
        render_unindexed_warning(&self.unresolved)
    }
}

/// Computes the reflective closure of all registered requests against one global
/// index.
pub struct ReflectiveHierarchyStep {
    index: TypeIndexPtr,
    predicates: PredicateRegistry,
    requests: Vec<HierarchyRequest>,
}

impl ReflectiveHierarchyStep {
    /// The platform-type warning rule is always registered.
    pub fn new(index: TypeIndexPtr) -> Self {
        let mut predicates = PredicateRegistry::new();
        predicates.register_ignore_warning(platform_type_rule());
        Self {
            index,
            predicates,
            requests: Vec::new(),
        }
    }

    pub fn add_request(&mut self, request: HierarchyRequest) -> &mut Self {
        self.requests.push(request);
        self
    }

    pub fn register_ignore_warning(&mut self, predicate: NamePredicate) -> &mut Self {
        self.predicates.register_ignore_warning(predicate);
        self
    }

    pub fn register_writable(&mut self, predicate: DescriptorPredicate) -> &mut Self {
        self.predicates.register_writable(predicate);
        self
    }

    pub fn requests(&self) -> &[HierarchyRequest] {
        &self.requests
    }

    /// Processes every request in registration order against a fresh state, streaming
    /// records into `sink`. Unresolved types are reported once, after filtering.
    pub fn run(&self, sink: &mut dyn RegistrationSink) -> Result<ClosureReport> {
        let start = Instant::now();
        let writable = self.predicates.writable_predicate();
        let mut state = ClosureState::new();

        {
            let mut engine = ClosureEngine::new(&*self.index, &writable, &mut state, sink);
            for request in &self.requests {
                engine.process(request)?;
            }
        }

        let unresolved = filter_warnings(state.unresolved(), &self.predicates.ignore_warning_predicate());
        let report = ClosureReport {
            records: state.processed_count(),
            unresolved,
        };

        info!(
            "Reflective closure of {} seed(s) registered {} type(s) in {:?}",
            self.requests.len(),
            report.records,
            start.elapsed()
        );
        if let Some(message) = report.warning_message() {
            warn!("{}", message);
        }

        Ok(report)
    }
}

impl fmt::Debug for ReflectiveHierarchyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReflectiveHierarchyStep")
            .field("requests", &self.requests)
            .field("predicates", &self.predicates)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflscope_api::{EmptyIndex, TypeRef};
    use std::sync::Arc;

    #[test]
    fn test_debug_lists_requests() {
        let mut step = ReflectiveHierarchyStep::new(Arc::new(EmptyIndex));
        step.add_request(
            HierarchyRequest::new(TypeRef::class("com.acme.Order")).with_source("rest"),
        );

        let rendered = format!("{:?}", step);
        assert!(rendered.starts_with("ReflectiveHierarchyStep"));
        assert!(rendered.contains("com.acme.Order"));
        assert!(rendered.contains("rest"));
    }
}
