use reflscope_api::{RegistrationRecord, TypeIndexPtr};
use reflscope_core::{ClosureReport, HierarchyRequest, ReflectiveHierarchyStep};
use reflscope_java::{JavaTypeIndex, default_ignore_predicate, parse_signature};
use std::sync::Arc;

/// Runs the closure of `seeds` with the Java default ignore rules.
pub fn closure(index: JavaTypeIndex, seeds: &[&str]) -> (Vec<RegistrationRecord>, ClosureReport) {
    let index: TypeIndexPtr = Arc::new(index);
    let mut step = ReflectiveHierarchyStep::new(index);
    for seed in seeds {
        let ty = parse_signature(seed).unwrap();
        step.add_request(HierarchyRequest::new(ty).with_ignore(default_ignore_predicate()));
    }

    let mut records = Vec::new();
    let report = step.run(&mut records).unwrap();
    (records, report)
}

pub fn names(records: &[RegistrationRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}
